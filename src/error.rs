use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a conversion.
///
/// Malformed-but-plausible content and math never end up here; they convert
/// with fallbacks or produce a [`Warning`](crate::Warning).
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse header: {0}")]
    HeaderParse(#[source] serde_yaml::Error),

    #[error("header is not a key-value mapping")]
    HeaderNotMapping,

    #[error("failed to serialize header: {0}")]
    HeaderSerialize(#[source] serde_yaml::Error),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
