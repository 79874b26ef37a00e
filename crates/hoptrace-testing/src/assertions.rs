//! Custom assertions over the CLI's JSON envelope.
//!
//! Successful commands print `{badge, content, suggestions}`; failures print
//! `{error, status, allowed_commands?}`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the badge level (`success`, `info` or `warning`).
pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;

    if level != expected {
        anyhow::bail!("Expected badge level {}, got {}", expected, level);
    }

    Ok(())
}

/// Assert that `content.hops` holds the expected number of hops.
pub fn assert_hop_count(json: &Value, expected: usize) -> Result<()> {
    let hops = json["content"]["hops"]
        .as_array()
        .context("Expected 'content.hops' array in JSON")?;

    if hops.len() != expected {
        anyhow::bail!("Expected {} hops, got {}", expected, hops.len());
    }

    Ok(())
}

/// Assert that a run listing holds the expected number of runs.
pub fn assert_run_count(json: &Value, expected: usize) -> Result<()> {
    let runs = json["content"]["runs"]
        .as_array()
        .context("Expected 'content.runs' array in JSON")?;

    if runs.len() != expected {
        anyhow::bail!("Expected {} runs, got {}", expected, runs.len());
    }

    Ok(())
}

/// Assert a failure payload's status (`client_error`, `forbidden`, ...).
pub fn assert_error_status(json: &Value, expected: &str) -> Result<()> {
    let status = json["status"]
        .as_str()
        .context("Expected 'status' in error JSON")?;

    if status != expected {
        anyhow::bail!(
            "Expected status {}, got {} (error: {})",
            expected,
            status,
            json["error"]
        );
    }

    Ok(())
}

/// The `target` entry of a path tree listing.
pub fn find_path_target<'a>(json: &'a Value, target: &str) -> Result<&'a Value> {
    json["content"]["targets"]
        .as_array()
        .context("Expected 'content.targets' array in JSON")?
        .iter()
        .find(|t| t["target"] == target)
        .with_context(|| format!("Target {} not in path tree", target))
}
