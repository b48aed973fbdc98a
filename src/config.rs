use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::document::DEFAULT_MAX_DEPTH;
use crate::utils::is_valid_module_path;

pub const CONFIG_FILE_NAME: &str = ".glotgenrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    /// Use only this file (relative to `sourceDir`) instead of every JSON file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_keys_file")]
    pub keys_file: String,
    #[serde(default = "default_messages_file")]
    pub messages_file: String,
    /// Document whose keys become constants. Defaults to the first file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_locale: Option<String>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub skip_branch_keys: bool,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    #[serde(default = "default_runtime_path")]
    pub runtime_path: String,
}

fn default_source_dir() -> String {
    "./messages".to_string()
}

fn default_output_dir() -> String {
    "./src/generated".to_string()
}

fn default_keys_file() -> String {
    "locale_keys.rs".to_string()
}

fn default_messages_file() -> String {
    "codegen_loader.rs".to_string()
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_runtime_path() -> String {
    "glotgen::runtime".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            source_file: None,
            output_dir: default_output_dir(),
            keys_file: default_keys_file(),
            messages_file: default_messages_file(),
            reference_locale: None,
            strict: false,
            skip_branch_keys: false,
            max_depth: default_max_depth(),
            runtime_path: default_runtime_path(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            bail!("'maxDepth' must be at least 1");
        }

        for (field, value) in [
            ("keysFile", &self.keys_file),
            ("messagesFile", &self.messages_file),
        ] {
            if value.trim().is_empty() {
                bail!("'{}' must not be empty", field);
            }
        }

        if self.keys_file == self.messages_file {
            bail!(
                "'keysFile' and 'messagesFile' must differ, both are \"{}\"",
                self.keys_file
            );
        }

        if !is_valid_module_path(&self.runtime_path) {
            bail!(
                "Invalid Rust module path in 'runtimePath': \"{}\"",
                self.runtime_path
            );
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
