use hoptrace_types::NO_HOSTNAME;

pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// RTT cell: `*` for a lost probe.
pub fn rtt(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("{} ms", v),
        None => NO_HOSTNAME.to_string(),
    }
}

/// Comma-separated set, or `-` when empty.
pub fn list(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}
