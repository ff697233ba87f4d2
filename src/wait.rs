//! Bounded wait conditions for page readiness.
//!
//! Navigation is only "done" for our purposes once the document has finished
//! loading and the network has gone quiet. Both checks poll the page at a
//! fixed interval under a hard timeout; neither blocks past its deadline.

use crate::error::{Error, Result};
use chromiumoxide::page::Page;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Default timeout for wait operations (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default poll interval for checking conditions (100ms).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Default window with no network activity before a page counts as idle.
pub const DEFAULT_IDLE_WINDOW: Duration = Duration::from_millis(500);

/// Configuration for wait operations.
#[derive(Debug, Clone, Copy)]
pub struct WaitConfig {
    /// Maximum time to wait for the condition.
    pub timeout: Duration,

    /// How often to check if the condition is satisfied.
    pub poll_interval: Duration,
}

impl WaitConfig {
    /// Creates a new wait configuration.
    #[must_use]
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    /// Creates a config with custom timeout and default poll interval.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new(timeout, DEFAULT_POLL_INTERVAL)
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_POLL_INTERVAL)
    }
}

/// A time budget shared across successive wait phases.
///
/// Each phase asks for [`Budget::remaining`] and gets whatever the earlier
/// phases left over; once the budget is spent, `remaining` is zero and any
/// wait bounded by it fails immediately.
#[derive(Debug, Clone, Copy)]
pub struct Budget {
    started: Instant,
    total: Duration,
}

impl Budget {
    /// Starts a new budget of `total`, counting from now.
    #[must_use]
    pub fn new(total: Duration) -> Self {
        Self {
            started: Instant::now(),
            total,
        }
    }

    /// Time spent since the budget started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Time left, saturating at zero once the budget is spent.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.total.saturating_sub(self.started.elapsed())
    }
}

/// Waits for a fallible condition to become true, with timeout.
///
/// The condition is called repeatedly at `poll_interval` until it returns
/// `Ok(true)` or the timeout expires. A condition error is treated as
/// transient (the page may still be mid-navigation) and waiting continues.
pub async fn wait_for_result<F, Fut>(
    condition: F,
    config: WaitConfig,
    description: &str,
) -> Result<()>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let start = Instant::now();

    loop {
        match condition().await {
            Ok(true) => return Ok(()),
            Ok(false) | Err(_) => {
                // Continue waiting on false or transient errors
            }
        }

        if start.elapsed() >= config.timeout {
            return Err(Error::WaitTimeout {
                condition: description.to_string(),
                timeout: config.timeout,
            });
        }

        sleep(config.poll_interval).await;
    }
}

/// Waits until `document.readyState` is `"complete"`.
///
/// The load and `DOMContentLoaded` events have both fired by the time the
/// ready state reaches `"complete"`, so this covers both.
///
/// # Errors
///
/// Returns [`Error::WaitTimeout`] if the document does not finish loading
/// within the configured timeout.
pub async fn wait_for_document_ready(page: &Page, config: WaitConfig) -> Result<()> {
    wait_for_result(
        || async {
            let result = page.evaluate("document.readyState").await?;

            let ready = result
                .value()
                .and_then(|v| v.as_str())
                .is_some_and(|s| s == "complete");

            Ok(ready)
        },
        config,
        "document ready",
    )
    .await
}

/// Waits until no new network resources have arrived for `idle_window`.
///
/// This is a quiescence heuristic, not a guarantee: it watches the page's
/// resource-timing entry count and declares the network idle once the count
/// has been stable for the full window. Evaluation errors are treated as
/// transient and do not reset the window.
///
/// # Errors
///
/// Returns [`Error::WaitTimeout`] if the network never goes quiet within the
/// configured timeout.
pub async fn wait_for_network_idle(
    page: &Page,
    idle_window: Duration,
    config: WaitConfig,
) -> Result<()> {
    let start = Instant::now();
    let mut last_count: Option<u64> = None;
    let mut stable_since = Instant::now();

    loop {
        if let Ok(count) = resource_count(page).await {
            if last_count != Some(count) {
                last_count = Some(count);
                stable_since = Instant::now();
            } else if stable_since.elapsed() >= idle_window {
                return Ok(());
            }
        }

        if start.elapsed() >= config.timeout {
            return Err(Error::WaitTimeout {
                condition: "network idle".to_string(),
                timeout: config.timeout,
            });
        }

        sleep(config.poll_interval).await;
    }
}

async fn resource_count(page: &Page) -> Result<u64> {
    let result = page
        .evaluate("window.performance.getEntriesByType('resource').length")
        .await?;

    Ok(result
        .value()
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0))
}
