// draftcatch - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. The single extract-then-publish pass

use clap::Parser;
use draftcatch::core::{extract, publish};
use draftcatch::util;
use draftcatch::util::error::{DraftcatchError, Result};
use std::io::Read;

/// draftcatch - Extracts the preview deployment URL from deploy logs.
///
/// Pipe the output of your deploy command into draftcatch; the first draft
/// URL found is published as the `draft_url` step output, either appended to
/// the file named by GITHUB_OUTPUT or emitted as a legacy ::set-output
/// marker on stdout.
#[derive(Parser, Debug)]
#[command(name = "draftcatch", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::debug!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "draftcatch starting"
    );

    if let Err(e) = run() {
        tracing::error!(error = %e, "Run failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// One pass: read all of stdin, extract, publish. No retries.
fn run() -> Result<()> {
    let mut logs = String::new();
    std::io::stdin()
        .read_to_string(&mut logs)
        .map_err(|e| DraftcatchError::Io {
            operation: "reading deploy logs from stdin",
            source: e,
        })?;

    let preview: String = logs
        .chars()
        .take(util::constants::DEBUG_MAX_LOG_PREVIEW)
        .collect();
    tracing::debug!(bytes = logs.len(), preview = %preview, "Deploy logs read");

    let url = extract::extract_draft_url(&logs)?;
    let channel = publish::OutputChannel::detect();
    publish::publish(&url, &channel)?;

    Ok(())
}
