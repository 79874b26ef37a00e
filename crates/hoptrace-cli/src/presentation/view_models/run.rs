use serde::Serialize;

use super::common::HopRowViewModel;

#[derive(Debug, Serialize)]
pub struct CommandViewModel {
    pub command: String,
    pub command_type: String,
    pub argv: Vec<String>,
    pub return_code: i32,
    pub stderr: String,
    pub timed_out: bool,
    /// Present for route traces that produced output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hops: Option<Vec<HopRowViewModel>>,
    /// Present for name lookups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub saved_as: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct BatchViewModel {
    pub count: usize,
    pub results: Vec<BatchEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct BatchEntryViewModel {
    pub target: String,
    pub command: String,
    pub return_code: i32,
    pub stderr: String,
    pub timed_out: bool,
    pub hops: Option<Vec<HopRowViewModel>>,
    pub saved_as: Option<i64>,
}
