use serde::Serialize;

use super::common::HopRowViewModel;

#[derive(Debug, Serialize)]
pub struct ParseViewModel {
    pub hops: Vec<HopRowViewModel>,
    /// Per-line classification, only with `--explain`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<LineViewModel>>,
}

#[derive(Debug, Serialize)]
pub struct LineViewModel {
    pub line_number: usize,
    pub kind: String,
    pub text: String,
    pub hop: Option<u32>,
}
