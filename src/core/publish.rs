// draftcatch - core/publish.rs
//
// Step-output publishing over one of two environment-selected channels.
// Line formatting writes to any Write trait object; only `publish` itself
// opens the real file or stdout.

use crate::util::constants;
use crate::util::error::PublishError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Destination for the extracted URL. Exactly one channel is used per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputChannel {
    /// Append `draft_url=<url>` to the structured step-output file named by
    /// the `GITHUB_OUTPUT` environment variable.
    File(PathBuf),

    /// Write the legacy `::set-output` marker line to stdout, for older
    /// runners that capture outputs from the command's output stream.
    LegacyStdout,
}

impl OutputChannel {
    /// Select the channel from the process environment. The variable is read
    /// once, here, at the point of use.
    pub fn detect() -> Self {
        let channel = Self::from_env_value(std::env::var(constants::OUTPUT_FILE_ENV).ok());
        tracing::debug!(channel = ?channel, "Output channel selected");
        channel
    }

    /// Map the raw environment value to a channel. An unset or empty variable
    /// selects the legacy stdout marker.
    fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(path) if !path.is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::LegacyStdout,
        }
    }
}

/// Publish the extracted URL through the given channel.
///
/// One-shot: exactly one line is written, the write is flushed, and failures
/// are fatal to the caller. The step-output file is opened append-only and
/// created if missing; existing content is preserved so successive tools in
/// the same run can accumulate output lines.
pub fn publish(url: &str, channel: &OutputChannel) -> Result<(), PublishError> {
    match channel {
        OutputChannel::File(path) => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| PublishError::File {
                    path: path.clone(),
                    source: e,
                })?;
            write_output_line(url, &mut file).map_err(|e| PublishError::File {
                path: path.clone(),
                source: e,
            })?;
            tracing::info!(
                key = constants::OUTPUT_KEY,
                url,
                path = %path.display(),
                "Step output appended"
            );
        }
        OutputChannel::LegacyStdout => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_legacy_marker(url, &mut handle)
                .map_err(|e| PublishError::Stdout { source: e })?;
            tracing::info!(key = constants::OUTPUT_KEY, url, "Legacy marker emitted");
        }
    }
    Ok(())
}

/// Write the `key=value` step-output line.
fn write_output_line<W: Write>(url: &str, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "{}={}", constants::OUTPUT_KEY, url)?;
    writer.flush()
}

/// Write the legacy `::set-output` marker line.
fn write_legacy_marker<W: Write>(url: &str, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "::set-output name={}::{}", constants::OUTPUT_KEY, url)?;
    writer.flush()
}
