// draftcatch - tests/e2e_pipeline.rs
//
// End-to-end tests for the extract-then-publish pipeline.
//
// These tests exercise real regex extraction over captured Netlify CLI
// output fixtures and real file appends on disk — no mocks, no stubs.

use draftcatch::core::extract::extract_draft_url;
use draftcatch::core::publish::{publish, OutputChannel};
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_text(name: &str) -> String {
    fs::read_to_string(fixture(name)).expect("read fixture")
}

// =============================================================================
// Extraction E2E
// =============================================================================

/// Old-format CLI output: the labelled draft URL wins over the deploy-logs
/// URL that appears earlier in the text.
#[test]
fn e2e_extracts_labelled_url_from_draft_deploy_log() {
    let logs = fixture_text("netlify_draft_deploy.log");
    let url = extract_draft_url(&logs).expect("fixture contains a draft URL");
    assert_eq!(
        url,
        "https://64f1c2ab9e8d7a0008c1f3d2--example-site.netlify.app"
    );
}

/// New-format CLI output: the URL sits on its own line inside a box with no
/// marker phrase; the unlabelled netlify.app pattern picks it up.
#[test]
fn e2e_extracts_unlabelled_url_from_box_output_log() {
    let logs = fixture_text("netlify_box_output.log");
    let url = extract_draft_url(&logs).expect("fixture contains a draft URL");
    assert_eq!(
        url,
        "https://68a1b0c7d2e3f40009aa1b2c--example-site.netlify.app"
    );
}

// =============================================================================
// Publish E2E
// =============================================================================

/// Full pipeline against the file channel: extract from a real fixture and
/// append to a step-output file that already has content.
#[test]
fn e2e_extract_then_append_preserves_existing_output() {
    let logs = fixture_text("netlify_draft_deploy.log");
    let url = extract_draft_url(&logs).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gh_output");
    fs::write(&path, "foo\n").unwrap();

    publish(&url, &OutputChannel::File(path.clone())).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        format!("foo\ndraft_url={url}\n"),
        "publish must append exactly one line and preserve existing content"
    );
}

/// Two successive publishes accumulate two lines, mirroring how multiple
/// tools append outputs across one automation run.
#[test]
fn e2e_successive_publishes_accumulate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gh_output");
    let channel = OutputChannel::File(path.clone());

    publish("https://one.netlify.app", &channel).unwrap();
    publish("https://two.netlify.app", &channel).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "draft_url=https://one.netlify.app\ndraft_url=https://two.netlify.app\n"
    );
}

/// A failed build log with no URL at all must fail, and the error message
/// must embed the original log text for operator diagnosis.
#[test]
fn e2e_failed_build_log_reports_original_text() {
    let logs = "- Hashing files...\nError: deploy failed, exit code 2\n";
    let err = extract_draft_url(logs).expect_err("no URL present");
    assert!(
        err.to_string().contains("exit code 2"),
        "failure message should carry the original log text"
    );
}
