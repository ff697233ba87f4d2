//! shotcheck - batch URL screenshot validator.
//!
//! Entry point: parse arguments, initialize logging, run the validator, and
//! translate the outcome into an exit status. Per-URL failures are reported
//! in the summary and do not affect the exit status; only config loading and
//! browser connection failures exit non-zero.

use clap::Parser;
use console::style;
use shotcheck::{cli, logger, report, CaptureOptions, Config, Validator};
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::Cli::parse();

    logger::init(args.verbose, args.quiet, args.no_color);
    if args.no_color {
        console::set_colors_enabled(false);
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: cli::Cli) -> shotcheck::Result<()> {
    let config = Config::load(&args.config).await?;

    let capture = CaptureOptions {
        timeout: Duration::from_secs(args.timeout),
        ..CaptureOptions::default()
    };

    let validator = Validator::new(config)
        .with_endpoint(&args.endpoint)
        .with_out_dir(&args.out_dir)
        .with_capture_options(capture);

    let results = validator.validate().await?;

    // Per-URL validation ran: the run succeeds at the process level no
    // matter how many URLs failed or whether the report could be printed.
    report::emit(&results, args.json);

    Ok(())
}
