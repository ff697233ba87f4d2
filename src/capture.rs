//! Screenshot capture and output file naming.
//!
//! A capture is: navigate the shared page, wait for the document to finish
//! loading and the network to go quiet, take a full-page PNG, and write it
//! under the output directory at a deterministic sanitized filename.

use crate::error::{Error, Result};
use crate::wait::{
    self, Budget, WaitConfig, DEFAULT_IDLE_WINDOW, DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT,
};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::{Page, ScreenshotParams};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Timing knobs for a single capture.
#[derive(Debug, Clone, Copy)]
pub struct CaptureOptions {
    /// Total budget for navigation plus readiness waits.
    pub timeout: Duration,

    /// Quiet window required before the network counts as idle.
    pub idle_window: Duration,

    /// Poll interval for readiness checks.
    pub poll_interval: Duration,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            idle_window: DEFAULT_IDLE_WINDOW,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Derives a filesystem-safe filename stem from a URL.
///
/// Strips one leading `http://` or `https://` and replaces every remaining
/// `/` with `_`. Deterministic and total over any input, but not injective:
/// distinct URLs can sanitize to the same name, in which case the later
/// screenshot overwrites the earlier one.
#[must_use]
pub fn sanitize_url(url: &str) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    stripped.replace('/', "_")
}

/// Returns the output path a screenshot of `url` is written to.
#[must_use]
pub fn screenshot_path(out_dir: &Path, url: &str) -> PathBuf {
    out_dir.join(format!("{}.png", sanitize_url(url)))
}

/// Idempotently creates the output directory.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be created. An existing
/// directory is not an error.
pub async fn ensure_output_dir(out_dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(out_dir).await?;
    Ok(())
}

/// Navigates `page` to `url` and writes a full-page screenshot under
/// `out_dir`, returning the path of the written file.
///
/// The wait budget in `opts.timeout` is shared across navigation, document
/// readiness, and network quiescence.
///
/// # Errors
///
/// Returns [`Error::Navigation`] if navigation fails or the page does not
/// become ready in time, and [`Error::Capture`] if taking the screenshot or
/// writing the file fails. Both name the offending URL.
pub async fn capture(
    page: &Page,
    url: &str,
    out_dir: &Path,
    opts: &CaptureOptions,
) -> Result<PathBuf> {
    info!("Navigating to {url}...");
    let budget = Budget::new(opts.timeout);

    // goto is bounded by the same budget as the readiness waits; CDP's own
    // request timeout is independent of --timeout.
    tokio::time::timeout(budget.remaining(), page.goto(url))
        .await
        .map_err(|_| Error::Navigation {
            url: url.to_string(),
            reason: format!("navigation timed out after {:?}", opts.timeout),
        })?
        .map_err(|e| Error::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
    debug!("Navigation committed after {:?}", budget.elapsed());

    wait::wait_for_document_ready(page, WaitConfig::new(budget.remaining(), opts.poll_interval))
        .await
        .map_err(|e| Error::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
    debug!("Document ready after {:?}", budget.elapsed());

    wait::wait_for_network_idle(
        page,
        opts.idle_window,
        WaitConfig::new(budget.remaining(), opts.poll_interval),
    )
    .await
    .map_err(|e| Error::Navigation {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    debug!("Network idle after {:?}", budget.elapsed());

    info!("Taking screenshot of {url}...");
    let params = ScreenshotParams::builder()
        .format(CaptureScreenshotFormat::Png)
        .full_page(true)
        .build();

    let bytes = page.screenshot(params).await.map_err(|e| Error::Capture {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let path = screenshot_path(out_dir, url);
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| Error::Capture {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_scheme_and_replaces_slashes() {
        assert_eq!(sanitize_url("https://a.com/b/c"), "a.com_b_c");
        assert_eq!(sanitize_url("http://x.com/"), "x.com_");
    }

    #[test]
    fn sanitize_is_total_over_schemeless_input() {
        assert_eq!(sanitize_url("a.com/b"), "a.com_b");
        assert_eq!(sanitize_url(""), "");
        assert_eq!(sanitize_url("file:///etc/hosts"), "file:___etc_hosts");
    }

    #[test]
    fn sanitize_strips_only_one_scheme_prefix() {
        // Only the leading scheme is removed; anything later stays.
        assert_eq!(
            sanitize_url("https://proxy/http://inner"),
            "proxy_http:__inner"
        );
    }

    #[test]
    fn sanitize_is_deterministic_so_duplicates_collide() {
        let a = sanitize_url("https://example.com/page");
        let b = sanitize_url("https://example.com/page");
        // Same URL twice resolves to the same file: documented overwrite.
        assert_eq!(a, b);
        // Distinct URLs can collide too.
        assert_eq!(
            sanitize_url("https://example.com/page"),
            sanitize_url("http://example.com/page")
        );
    }

    #[test]
    fn screenshot_path_joins_out_dir_and_png_extension() {
        let path = screenshot_path(Path::new("screenshots"), "https://a.com/b");
        assert_eq!(path, Path::new("screenshots").join("a.com_b.png"));
    }

    #[tokio::test]
    async fn ensure_output_dir_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("screenshots");

        ensure_output_dir(&out).await.expect("first create");
        assert!(out.is_dir());
        ensure_output_dir(&out).await.expect("second create");
    }
}
