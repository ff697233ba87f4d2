//! Error types for screenshot validation.
//!
//! The taxonomy distinguishes two fatal startup failures (config loading and
//! browser connection, both of which abort the run) from the two per-URL
//! failures (navigation and capture, which are recorded in the result list
//! and never abort the batch).

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// The main error type for all validation operations.
///
/// Each variant carries enough context to produce an actionable message:
/// the two fatal variants embed remediation text (the expected config shape,
/// the command to start a debuggable browser), and the per-URL variants name
/// the offending URL.
#[derive(Debug, Error)]
pub enum Error {
    /// The config file is missing, unreadable, or not valid JSON.
    ///
    /// Fatal: no browser connection is attempted after this.
    #[error(
        "failed to load config file '{}': {reason}\n\nExample contents:\n{}",
        path.display(),
        crate::config::CONFIG_EXAMPLE
    )]
    Config {
        /// Path of the config file that failed to load
        path: PathBuf,
        /// Why reading or parsing failed
        reason: String,
    },

    /// No browser is listening on the debugging endpoint, or the CDP
    /// handshake failed.
    ///
    /// Fatal: no URL is processed and no screenshot is written.
    #[error(
        "failed to connect to Chrome at {endpoint}: {reason}\n\
         Make sure Chrome is running with remote debugging enabled. \
         Run this command first:\n  {}",
        crate::browser::LAUNCH_HINT
    )]
    Connection {
        /// The debugging endpoint we tried to reach
        endpoint: String,
        /// Why the connection attempt failed
        reason: String,
    },

    /// Navigation to a URL failed or exceeded the timeout.
    ///
    /// Per-URL: recorded as a failed result, the batch continues.
    #[error("navigation to '{url}' failed: {reason}")]
    Navigation {
        /// The URL that failed to load
        url: String,
        /// Reason for the navigation failure
        reason: String,
    },

    /// Screenshot capture or the file write failed for a URL.
    ///
    /// Per-URL: recorded as a failed result, the batch continues.
    #[error("screenshot failed for '{url}': {reason}")]
    Capture {
        /// The URL whose screenshot failed
        url: String,
        /// Reason capture or the write failed
        reason: String,
    },

    /// A wait condition was not satisfied within the timeout.
    #[error("wait condition '{condition}' timed out after {timeout:?}")]
    WaitTimeout {
        /// Description of the condition that timed out
        condition: String,
        /// How long we waited before timing out
        timeout: Duration,
    },

    /// Wraps errors from the chromiumoxide library.
    #[error("chromiumoxide error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    /// Generic I/O errors (directory creation, file writes).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the JSON report failed.
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

/// A specialized Result type for validation operations.
pub type Result<T> = std::result::Result<T, Error>;
