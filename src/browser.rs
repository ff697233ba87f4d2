//! Browser connection management.
//!
//! This module attaches to an already-running Chrome instance over its
//! remote-debugging endpoint. The browser process is an external
//! collaborator: we never launch it, and disconnecting must leave it
//! running. The connection is the one resource that requires guaranteed
//! release, which the orchestrator performs exactly once per run.

use crate::error::{Error, Result};
use chromiumoxide::browser::Browser;
use chromiumoxide::handler::viewport::Viewport;
use chromiumoxide::handler::HandlerConfig;
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::debug;

/// Default remote-debugging endpoint of the browser we attach to.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:9222";

/// Default viewport requested for the debugging session.
pub const DEFAULT_VIEWPORT: (u32, u32) = (1920, 1080);

/// The command suggested to the user when no browser is listening.
pub const LAUNCH_HINT: &str = "google-chrome --remote-debugging-port=9222 \
    --no-first-run --no-default-browser-check \
    --user-data-dir=$(mktemp -d -t chrome-remote.XXXXXX)";

/// A connection to a running browser's debugging endpoint.
///
/// The caller that connects owns the connection and must release it via
/// [`BrowserHandle::disconnect`]. Disconnecting drops the CDP session only;
/// the remote browser process survives.
pub struct BrowserHandle {
    browser: Browser,
    endpoint: String,
    handler_task: JoinHandle<()>,
}

impl BrowserHandle {
    /// Attaches to the browser listening at `endpoint`, requesting the given
    /// viewport for pages opened through this session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] if nothing is listening on the endpoint
    /// or the CDP handshake fails. The error message includes the command to
    /// start a compatible browser.
    pub async fn connect(endpoint: &str, viewport: (u32, u32)) -> Result<Self> {
        debug!("Connecting to browser at {endpoint}");

        let config = HandlerConfig {
            viewport: Some(Viewport {
                width: viewport.0,
                height: viewport.1,
                ..Viewport::default()
            }),
            ..HandlerConfig::default()
        };

        let (browser, mut handler) = Browser::connect_with_config(endpoint, config)
            .await
            .map_err(|e| Error::Connection {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        // Drive the CDP event stream; chromiumoxide requires this to make
        // progress on every in-flight command.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("CDP handler error: {e}");
                }
            }
        });

        debug!("Connected to browser");

        Ok(Self {
            browser,
            endpoint: endpoint.to_string(),
            handler_task,
        })
    }

    /// Opens a new page (tab) in the connected browser.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] if the browser refuses to create the
    /// page, which usually means the session died between connect and here.
    pub async fn new_page(&self) -> Result<Page> {
        self.browser
            .new_page("about:blank")
            .await
            .map_err(|e| Error::Connection {
                endpoint: self.endpoint.clone(),
                reason: format!("failed to open a page: {e}"),
            })
    }

    /// Releases the connection without terminating the remote browser.
    ///
    /// Dropping the `Browser` closes the CDP websocket; since we attached to
    /// an existing process rather than spawning one, there is no child to
    /// kill. The handler task ends once the stream closes; aborting it here
    /// just makes the shutdown prompt.
    pub async fn disconnect(self) {
        debug!("Disconnecting from browser (remote process keeps running)");
        drop(self.browser);
        self.handler_task.abort();
        let _ = self.handler_task.await;
    }
}
