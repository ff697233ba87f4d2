//! # shotcheck
//!
//! Batch URL screenshot validation through a remote-debuggable Chrome.
//!
//! shotcheck attaches to an already-running Chrome instance over its
//! DevTools endpoint, navigates a single shared page to each configured URL
//! in order, saves a full-page PNG of each under the output directory, and
//! reports per-URL success or failure. A URL that fails to render is
//! recorded and the batch continues; only config loading and the initial
//! browser connection abort the run.
//!
//! ## Architecture
//!
//! - **Config**: JSON config loading with an example-shape error message
//! - **BrowserHandle**: attach/disconnect lifecycle for the CDP session
//! - **capture**: navigation, readiness waits, sanitized output paths
//! - **Validator**: the sequential orchestration loop and result list
//! - **report**: human summary and JSON output
//!
//! ## Example
//!
//! ```ignore
//! use shotcheck::{Config, Validator};
//!
//! let config = Config::load(Path::new("config.json")).await?;
//! let results = Validator::new(config)
//!     .with_out_dir("screenshots")
//!     .validate()
//!     .await?;
//! for result in &results {
//!     println!("{}: {}", result.url(), result.is_success());
//! }
//! ```
//!
//! ## Testing
//!
//! Unit tests are mock-free logic tests (sanitization, waits, config
//! parsing). Integration tests that need a live Chrome with
//! `--remote-debugging-port=9222` are `#[ignore]`d; run them with
//! `cargo test -- --ignored`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod browser;
pub mod capture;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod report;
pub mod validator;
pub mod wait;

// Re-export main types for convenience
pub use browser::{BrowserHandle, DEFAULT_ENDPOINT, DEFAULT_VIEWPORT};
pub use capture::{sanitize_url, screenshot_path, CaptureOptions};
pub use config::Config;
pub use error::{Error, Result};
pub use validator::{UrlResult, Validator, DEFAULT_OUT_DIR};
pub use wait::{Budget, WaitConfig, DEFAULT_IDLE_WINDOW, DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT};
