use serde::Serialize;

/// One hop in the stringly wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HopRowViewModel {
    pub hop: String,
    pub hostname: String,
    pub ip: String,
    pub rtt1: Option<String>,
    pub rtt2: Option<String>,
    pub rtt3: Option<String>,
}

/// Outcome of a mutating command with nothing else to show.
#[derive(Debug, Clone, Serialize)]
pub struct ActionViewModel {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected: Option<usize>,
}
