use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use windstudio_model::Document;

pub const DEFAULT_DOCUMENT_NAME: &str = "document.json";

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing config and document
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing WindStudio project...".bright_blue().bold()
    );

    let config = Config::default();
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let document_path = PathBuf::from(cwd).join(DEFAULT_DOCUMENT_NAME);
    if !document_path.exists() || args.force {
        fs::write(&document_path, Document::sample().to_json()?)?;
        println!("  {} Created {}", "✓".green(), DEFAULT_DOCUMENT_NAME);
    }

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}", DEFAULT_DOCUMENT_NAME);
    println!("  2. Run: windstudio compile {}", DEFAULT_DOCUMENT_NAME);
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("windstudio-init-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_init_writes_config_and_sample() {
        let dir = scratch_dir("fresh");
        let cwd = dir.display().to_string();

        init(InitArgs { force: false }, &cwd).unwrap();

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config, Config::default());

        let source = fs::read_to_string(dir.join(DEFAULT_DOCUMENT_NAME)).unwrap();
        assert_eq!(Document::from_json(&source).unwrap(), Document::sample());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_init_keeps_existing_config_without_force() {
        let dir = scratch_dir("existing");
        let cwd = dir.display().to_string();
        fs::write(dir.join(DEFAULT_CONFIG_NAME), r#"{ "outDir": "custom" }"#).unwrap();

        init(InitArgs { force: false }, &cwd).unwrap();
        assert_eq!(Config::load(&cwd).unwrap().out_dir, "custom");
        assert!(!dir.join(DEFAULT_DOCUMENT_NAME).exists());

        init(InitArgs { force: true }, &cwd).unwrap();
        assert_eq!(Config::load(&cwd).unwrap().out_dir, "dist");

        fs::remove_dir_all(&dir).unwrap();
    }
}
