use super::open_fixture;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Document fixture to compile
    pub fixture: String,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Output file name (overrides config)
    #[arg(short, long)]
    pub file_name: Option<String>,

    /// WindUI loader URL (overrides config)
    #[arg(long)]
    pub loader_url: Option<String>,
}

pub fn compile(args: CompileArgs, cwd: &str) -> Result<()> {
    let mut config = Config::load(cwd)?;
    if let Some(out_dir) = args.out_dir {
        config.out_dir = out_dir;
    }
    if let Some(file_name) = args.file_name {
        config.file_name = file_name;
    }
    if let Some(loader_url) = args.loader_url {
        config.loader_url = loader_url;
    }

    let session = open_fixture(&args.fixture, cwd)?.with_options(config.compile_options());

    if args.stdout {
        println!("{}", session.export_text());
        return Ok(());
    }

    println!("{}", "🔨 Compiling WindStudio document...".bright_blue().bold());

    let file = session.export_file(&config.file_name);
    let written = file.write_to(&config.get_out_dir(cwd))?;
    info!(path = %written.display(), bytes = file.contents.len(), "script exported");

    let tab_count = session.document().tabs.len();
    println!(
        "  {} {} → {}",
        "✓".green(),
        args.fixture,
        relative_to(&written, cwd).display()
    );
    println!();
    println!(
        "{} Compiled {} tab{} successfully",
        "✅".green(),
        tab_count,
        if tab_count == 1 { "" } else { "s" }
    );

    Ok(())
}

fn relative_to(path: &std::path::Path, cwd: &str) -> PathBuf {
    path.strip_prefix(cwd).unwrap_or(path).to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIG_NAME;
    use std::fs;
    use windstudio_model::Document;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("windstudio-compile-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("document.json"), Document::sample().to_json().unwrap()).unwrap();
        dir
    }

    fn args(fixture: &str) -> CompileArgs {
        CompileArgs {
            fixture: fixture.to_string(),
            stdout: false,
            out_dir: None,
            file_name: None,
            loader_url: None,
        }
    }

    #[test]
    fn test_compile_writes_default_file() {
        let dir = scratch_dir("default");
        let cwd = dir.display().to_string();

        compile(args("document.json"), &cwd).unwrap();

        let lua = fs::read_to_string(dir.join("dist").join("windui-preview.lua")).unwrap();
        assert!(lua.contains("local Window = WindUI:CreateWindow({"));
        assert!(lua.contains("local Tab_2 = "));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_flags_override_config() {
        let dir = scratch_dir("override");
        let cwd = dir.display().to_string();
        fs::write(
            dir.join(DEFAULT_CONFIG_NAME),
            r#"{ "outDir": "from-config", "loaderUrl": "https://config.example/windui.lua" }"#,
        )
        .unwrap();

        let mut compile_args = args("document.json");
        compile_args.file_name = Some("hub.lua".to_string());
        compile(compile_args, &cwd).unwrap();

        let lua = fs::read_to_string(dir.join("from-config").join("hub.lua")).unwrap();
        assert!(lua.contains("https://config.example/windui.lua"));

        let mut compile_args = args("document.json");
        compile_args.out_dir = Some("from-flag".to_string());
        compile_args.loader_url = Some("https://flag.example/windui.lua".to_string());
        compile(compile_args, &cwd).unwrap();

        let lua = fs::read_to_string(dir.join("from-flag").join("windui-preview.lua")).unwrap();
        assert!(lua.contains("https://flag.example/windui.lua"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_fixture_is_an_error() {
        let dir = scratch_dir("missing");
        let cwd = dir.display().to_string();

        let err = compile(args("nope.json"), &cwd).unwrap_err();
        assert!(err.to_string().contains("Cannot read"));

        fs::write(dir.join("broken.json"), "{ tabs: ").unwrap();
        let err = compile(args("broken.json"), &cwd).unwrap_err();
        assert!(err.to_string().contains("Invalid document"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
