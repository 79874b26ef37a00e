use hoptrace_types::HopObservation;
use serde::Serialize;
use tracing::debug;

use crate::line::{LineKind, classify};

/// One input line together with what the parser made of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedLine {
    /// 1-based position in the input.
    pub line_number: usize,
    pub text: String,
    pub kind: LineKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hop: Option<HopObservation>,
}

/// Parse `traceroute`/`tracert` output into hops.
///
/// Hops come back in input order, without sorting or de-duplication. Lines
/// that fit no known layout are dropped. Never fails; unparseable input
/// yields an empty list.
pub fn parse_trace(raw_text: &str) -> Vec<HopObservation> {
    let hops: Vec<HopObservation> = raw_text
        .lines()
        .filter_map(|line| classify(line).1)
        .collect();
    debug!(hops = hops.len(), "parsed trace output");
    hops
}

/// Classify every line, keeping the ones that produced no hop.
pub fn classify_lines(raw_text: &str) -> Vec<ClassifiedLine> {
    raw_text
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            let (kind, hop) = classify(line);
            ClassifiedLine {
                line_number: idx + 1,
                text: line.to_string(),
                kind,
                hop,
            }
        })
        .collect()
}
