use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub header: HeaderConfig,
    pub code: CodeConfig,
    pub transforms: TransformsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct HeaderConfig {
    pub join_separator: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            join_separator: ", ".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CodeConfig {
    pub indent: usize,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

/// Switches for the body transforms. Math detection is not switchable.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TransformsConfig {
    pub strikethrough: bool,
    pub lists: bool,
    pub code_blocks: bool,
    pub images: bool,
}

impl Default for TransformsConfig {
    fn default() -> Self {
        Self {
            strikethrough: true,
            lists: true,
            code_blocks: true,
            images: true,
        }
    }
}

impl Config {
    /// The config embedded at build time.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("default_config.toml is validated by build.rs")
    }

    /// Load config from a TOML file, or return defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::compiled_default());
            }
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The string prepended to each line of a reformatted code block.
    pub fn code_indent(&self) -> String {
        " ".repeat(self.code.indent)
    }
}
