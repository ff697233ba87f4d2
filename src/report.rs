//! Result reporting.
//!
//! Two output modes: a styled per-URL summary for humans, and the raw result
//! array as JSON for tooling.

use crate::error::Result;
use crate::validator::UrlResult;
use console::style;
use tracing::error;

/// Prints the selected report for a completed batch.
///
/// Once per-URL validation has run, the process outcome is settled; a
/// failure while serializing the JSON report is logged, not escalated.
pub fn emit(results: &[UrlResult], json: bool) {
    if json {
        if let Err(e) = print_json(results) {
            error!("Failed to print JSON report: {e}");
        }
    } else {
        print_summary(results);
    }
}

/// Prints the human-readable per-URL summary with a count footer.
pub fn print_summary(results: &[UrlResult]) {
    println!("\nValidation Results:");

    for result in results {
        match result {
            UrlResult::Success { url, path } => {
                println!(
                    "{} {url} - Screenshot saved: {}",
                    style("✓").green().bold(),
                    path.display()
                );
            }
            UrlResult::Failed { url, error } => {
                println!("{} {url} - Error: {error}", style("✗").red().bold());
            }
        }
    }

    let failed = results.iter().filter(|r| !r.is_success()).count();
    println!(
        "\n{} processed, {} failed",
        results.len(),
        if failed == 0 {
            style(failed.to_string()).green()
        } else {
            style(failed.to_string()).red()
        }
    );
}

/// Prints the result array as pretty JSON on stdout.
///
/// # Errors
///
/// Returns [`crate::Error::Report`] if serialization fails.
pub fn print_json(results: &[UrlResult]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}
