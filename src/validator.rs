//! The validation orchestrator.
//!
//! Opens exactly one page on the connected browser and reuses it for every
//! configured URL, strictly in input order. A per-URL failure is recorded
//! and the batch continues; only config loading and the initial connection
//! are fatal. The browser connection is released exactly once, on every exit
//! path out of the batch.

use crate::browser::{BrowserHandle, DEFAULT_ENDPOINT, DEFAULT_VIEWPORT};
use crate::capture::{self, CaptureOptions};
use crate::config::Config;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Default directory screenshots are written to.
pub const DEFAULT_OUT_DIR: &str = "screenshots";

/// The outcome of validating a single URL.
///
/// Produced in input order, never mutated after creation. Serializes to
/// `{"status": "success"|"failed", "url": ..., "path"|"error": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum UrlResult {
    /// The URL rendered and its screenshot was written to `path`.
    Success {
        /// The validated URL
        url: String,
        /// Where the screenshot was saved
        path: PathBuf,
    },
    /// Navigation or capture failed; `error` carries the failure message.
    Failed {
        /// The URL that failed
        url: String,
        /// Human-readable failure message, naming the URL
        error: String,
    },
}

impl UrlResult {
    /// The URL this result is for.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            UrlResult::Success { url, .. } | UrlResult::Failed { url, .. } => url,
        }
    }

    /// Returns true for a successful capture.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, UrlResult::Success { .. })
    }
}

/// Validates a list of URLs by screenshotting each through one shared page.
///
/// All previously-implicit values (endpoint, output directory, timeouts) are
/// explicit fields so tests can point the validator at a fake endpoint and a
/// temporary directory.
#[derive(Debug, Clone)]
pub struct Validator {
    config: Config,
    endpoint: String,
    viewport: (u32, u32),
    out_dir: PathBuf,
    capture: CaptureOptions,
}

impl Validator {
    /// Creates a validator with default endpoint, viewport, and output
    /// directory.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            viewport: DEFAULT_VIEWPORT,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            capture: CaptureOptions::default(),
        }
    }

    /// Sets the remote-debugging endpoint to attach to.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the directory screenshots are written to.
    #[must_use]
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Sets the viewport requested from the browser.
    #[must_use]
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = (width, height);
        self
    }

    /// Sets per-capture timing options.
    #[must_use]
    pub fn with_capture_options(mut self, capture: CaptureOptions) -> Self {
        self.capture = capture;
        self
    }

    /// Runs the whole batch and returns one result per configured URL, in
    /// input order.
    ///
    /// The connection is released before this returns, whether the batch
    /// completed, a per-URL capture failed, or an unexpected error escaped
    /// the loop.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Connection`] if no browser is reachable and
    /// [`crate::Error::Io`] if the output directory cannot be created.
    /// Per-URL failures are not errors; they come back as
    /// [`UrlResult::Failed`] entries.
    pub async fn validate(&self) -> Result<Vec<UrlResult>> {
        capture::ensure_output_dir(&self.out_dir).await?;

        info!("Connecting to Chrome...");
        let browser = BrowserHandle::connect(&self.endpoint, self.viewport).await?;

        // Release the connection on every path out of the batch, exactly once.
        let results = self.run_batch(&browser).await;
        browser.disconnect().await;

        results
    }

    async fn run_batch(&self, browser: &BrowserHandle) -> Result<Vec<UrlResult>> {
        let page = browser.new_page().await?;
        info!("Starting URL validation...");

        let mut results = Vec::with_capacity(self.config.urls.len());
        for url in &self.config.urls {
            match capture::capture(&page, url, &self.out_dir, &self.capture).await {
                Ok(path) => {
                    results.push(UrlResult::Success {
                        url: url.clone(),
                        path,
                    });
                }
                Err(e) => {
                    warn!("Validation failed for {url}: {e}");
                    results.push(UrlResult::Failed {
                        url: url.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_serializes_with_status_and_path() {
        let result = UrlResult::Success {
            url: "https://a.com/b".to_string(),
            path: PathBuf::from("screenshots/a.com_b.png"),
        };
        let value = serde_json::to_value(&result).expect("serialize");

        assert_eq!(value["status"], "success");
        assert_eq!(value["url"], "https://a.com/b");
        assert_eq!(value["path"], "screenshots/a.com_b.png");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn failure_serializes_with_status_and_error() {
        let result = UrlResult::Failed {
            url: "https://a.com/".to_string(),
            error: "navigation to 'https://a.com/' failed: timeout".to_string(),
        };
        let value = serde_json::to_value(&result).expect("serialize");

        assert_eq!(value["status"], "failed");
        assert_eq!(value["url"], "https://a.com/");
        assert!(value["error"]
            .as_str()
            .expect("error string")
            .contains("https://a.com/"));
        assert!(value.get("path").is_none());
    }

    #[test]
    fn results_round_trip_through_json() {
        let results = vec![
            UrlResult::Success {
                url: "https://a.com/".to_string(),
                path: PathBuf::from("screenshots/a.com_.png"),
            },
            UrlResult::Failed {
                url: "https://b.com/".to_string(),
                error: "boom".to_string(),
            },
        ];

        let json = serde_json::to_string(&results).expect("serialize");
        let back: Vec<UrlResult> = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back.len(), 2);
        assert_eq!(back[0].url(), "https://a.com/");
        assert!(back[0].is_success());
        assert!(!back[1].is_success());
    }

    #[test]
    fn builder_overrides_defaults() {
        let validator = Validator::new(Config { urls: vec![] })
            .with_endpoint("http://127.0.0.1:9333")
            .with_out_dir("/tmp/shots")
            .with_viewport(800, 600);

        assert_eq!(validator.endpoint, "http://127.0.0.1:9333");
        assert_eq!(validator.out_dir, PathBuf::from("/tmp/shots"));
        assert_eq!(validator.viewport, (800, 600));
    }
}
