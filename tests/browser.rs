//! Integration tests against a live browser.
//!
//! These require a Chrome instance already running with
//! `--remote-debugging-port=9222`; they are ignored by default. Run with:
//!
//! ```sh
//! google-chrome --headless --remote-debugging-port=9222 \
//!     --user-data-dir=$(mktemp -d) &
//! cargo test -- --ignored
//! ```
//!
//! `data:` URLs keep the tests hermetic: they render without touching the
//! network.

use shotcheck::{capture, CaptureOptions, Config, Validator};
use std::time::Duration;

fn quick_capture() -> CaptureOptions {
    CaptureOptions {
        timeout: Duration::from_secs(10),
        ..CaptureOptions::default()
    }
}

#[tokio::test]
#[ignore] // requires Chrome listening on 127.0.0.1:9222
async fn validates_urls_in_input_order() {
    let out = tempfile::tempdir().expect("tempdir");
    let urls = vec![
        "data:text/html,<h1>one</h1>".to_string(),
        "data:text/html,<h1>two</h1>".to_string(),
        "data:text/html,<h1>three</h1>".to_string(),
    ];
    let config = Config { urls: urls.clone() };

    let results = Validator::new(config)
        .with_out_dir(out.path())
        .with_capture_options(quick_capture())
        .validate()
        .await
        .expect("validation run");

    assert_eq!(results.len(), urls.len());
    for (result, url) in results.iter().zip(&urls) {
        assert_eq!(result.url(), url);
        assert!(result.is_success(), "capture failed for {url}");
    }
}

#[tokio::test]
#[ignore] // requires Chrome listening on 127.0.0.1:9222
async fn successful_capture_writes_file_at_sanitized_path() {
    let out = tempfile::tempdir().expect("tempdir");
    let url = "data:text/html,<p>hello</p>".to_string();
    let config = Config { urls: vec![url.clone()] };

    let results = Validator::new(config)
        .with_out_dir(out.path())
        .with_capture_options(quick_capture())
        .validate()
        .await
        .expect("validation run");

    assert_eq!(results.len(), 1);
    match &results[0] {
        shotcheck::UrlResult::Success { path, .. } => {
            assert_eq!(*path, capture::screenshot_path(out.path(), &url));
            assert!(path.exists(), "screenshot file should exist");
        }
        shotcheck::UrlResult::Failed { error, .. } => {
            panic!("capture should succeed: {error}");
        }
    }
}

#[tokio::test]
#[ignore] // requires Chrome listening on 127.0.0.1:9222
async fn one_failing_url_does_not_abort_the_batch() {
    let out = tempfile::tempdir().expect("tempdir");
    // Port 1 is reserved; navigation fails fast.
    let bad = "http://127.0.0.1:1/".to_string();
    let good = "data:text/html,<p>after failure</p>".to_string();
    let config = Config {
        urls: vec![bad.clone(), good.clone()],
    };

    let results = Validator::new(config)
        .with_out_dir(out.path())
        .with_capture_options(quick_capture())
        .validate()
        .await
        .expect("validation run");

    assert_eq!(results.len(), 2);
    assert!(!results[0].is_success());
    match &results[0] {
        shotcheck::UrlResult::Failed { error, .. } => {
            assert!(error.contains(&bad), "error should name the URL");
        }
        shotcheck::UrlResult::Success { .. } => unreachable!(),
    }
    assert!(
        results[1].is_success(),
        "the URL after a failure is still processed"
    );
}
