use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".insomnia-gql.json";

pub const DEFAULT_OUTPUT_FILE: &str = "insomnia-import.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Project directory to scan. The `--directory` flag takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    /// Endpoint for every request. The `--url` flag takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_output() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

fn default_extensions() -> Vec<String> {
    ["jsx", "js"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: None,
            url: None,
            output: default_output(),
            extensions: default_extensions(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or no
    /// extension is configured.
    pub fn validate(&self) -> Result<()> {
        self.ignore_patterns()?;

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }
        if self.output.trim().is_empty() {
            bail!("'output' must not be empty");
        }

        Ok(())
    }

    /// Compile `ignores` into glob patterns.
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect()
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

/// Load the nearest config file above `start_dir`, or the defaults if there is none.
pub fn load_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}
