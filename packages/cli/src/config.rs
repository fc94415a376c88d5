use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use windstudio_compiler_lua::{CompileOptions, DEFAULT_FILE_NAME, DEFAULT_LOADER_URL};

pub const DEFAULT_CONFIG_NAME: &str = "windstudio.config.json";

/// WindStudio configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory the exported script is written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Name of the exported script
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// URL the generated preamble loads WindUI from
    #[serde(default = "default_loader_url")]
    pub loader_url: String,
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_loader_url() -> String {
    DEFAULT_LOADER_URL.to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions::default().with_loader_url(&self.loader_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            file_name: default_file_name(),
            loader_url: default_loader_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "outDir": "build",
            "fileName": "hub.lua",
            "loaderUrl": "https://example.com/windui.lua"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.out_dir, "build");
        assert_eq!(config.file_name, "hub.lua");
        assert_eq!(config.compile_options().loader_url, "https://example.com/windui.lua");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "outDir": "out" }"#).unwrap();
        assert_eq!(config.out_dir, "out");
        assert_eq!(config.file_name, "windui-preview.lua");
        assert_eq!(config.loader_url, DEFAULT_LOADER_URL);
    }

    #[test]
    fn test_missing_config_file() {
        let dir = std::env::temp_dir().join("windstudio-config-missing");
        let config = Config::load(&dir.display().to_string()).unwrap();
        assert_eq!(config, Config::default());
    }
}
