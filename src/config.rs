//! Config file loading.
//!
//! The config is a small JSON document listing the URLs to validate. It is
//! loaded once at startup and immutable afterward. Any load failure embeds
//! [`CONFIG_EXAMPLE`] in the error message so the user sees the expected
//! shape without consulting documentation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The expected shape of the config file, embedded in load errors.
pub const CONFIG_EXAMPLE: &str = r#"{
  "urls": [
    "https://example.com/"
  ]
}"#;

/// The validation run configuration.
///
/// Typed deserialization means a config without a `urls` field is rejected
/// at load time, with the example shape in the error message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URLs to validate, processed strictly in this order.
    pub urls: Vec<String>,
}

impl Config {
    /// Loads and parses the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file is missing, unreadable, or not
    /// valid JSON of the expected shape.
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::Config {
                path: path.to_owned(),
                reason: e.to_string(),
            })?;

        serde_json::from_str(&raw).map_err(|e| Error::Config {
            path: path.to_owned(),
            reason: e.to_string(),
        })
    }
}
