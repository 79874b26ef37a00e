use serde::{Deserialize, Serialize};

/// Longest name-lookup output kept, in characters.
pub const MAX_LOOKUP_OUTPUT: usize = 1000;

/// Name-lookup output handed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOutput {
    pub raw_output: String,
}

/// Wrap `dig`/`nslookup`/`whois` output, truncating it to
/// [`MAX_LOOKUP_OUTPUT`] characters with a trailing `...` when longer.
pub fn passthrough(raw_text: &str) -> LookupOutput {
    let raw_output = match raw_text.char_indices().nth(MAX_LOOKUP_OUTPUT) {
        Some((cut, _)) => format!("{}...", &raw_text[..cut]),
        None => raw_text.to_string(),
    };
    LookupOutput { raw_output }
}
