//! Command-line interface definition.
//!
//! A single command: read a config file listing URLs, screenshot each
//! through a running remote-debuggable Chrome, and report the outcomes.

use crate::browser::DEFAULT_ENDPOINT;
use crate::validator::DEFAULT_OUT_DIR;
use clap::Parser;
use std::path::PathBuf;

/// shotcheck - validate URLs by screenshotting them through a running Chrome
#[derive(Parser, Debug)]
#[command(
    name = "shotcheck",
    version,
    about = "Validate a list of URLs by taking full-page screenshots",
    long_about = "shotcheck attaches to an already-running Chrome instance with remote\n\
                  debugging enabled, navigates it to each URL in the config file, and\n\
                  saves a full-page screenshot of each. Per-URL failures are reported\n\
                  without aborting the batch."
)]
pub struct Cli {
    /// Path to the JSON config file listing the URLs to validate
    #[arg(default_value = "config.json")]
    pub config: PathBuf,

    /// Directory screenshots are written to
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Remote-debugging endpoint of the running browser
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Per-URL navigation timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Print the results as JSON instead of the human summary
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
