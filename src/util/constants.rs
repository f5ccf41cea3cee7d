// draftcatch - util/constants.rs
//
// Single source of truth for named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "draftcatch";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Step output
// =============================================================================

/// Name under which the extracted URL is published to the surrounding pipeline.
pub const OUTPUT_KEY: &str = "draft_url";

/// Environment variable naming the structured step-output file. When set and
/// non-empty, the publisher appends to this file; otherwise it falls back to
/// the legacy stdout marker.
pub const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum length (in characters) of the log-text preview included in debug
/// output.
/// Deploy logs can run to many kilobytes; debug traces only need the head.
pub const DEBUG_MAX_LOG_PREVIEW: usize = 200;
