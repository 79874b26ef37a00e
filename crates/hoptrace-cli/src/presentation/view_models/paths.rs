use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PathTreeViewModel {
    pub targets: Vec<PathTargetViewModel>,
}

#[derive(Debug, Serialize)]
pub struct PathTargetViewModel {
    pub target: String,
    pub depth: u32,
    pub branching_hops: Vec<u32>,
    /// Omitted in summary mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hops: Option<Vec<PathHopViewModel>>,
}

#[derive(Debug, Serialize)]
pub struct PathHopViewModel {
    pub hop: u32,
    pub nodes: Vec<String>,
    pub ips: Vec<String>,
}
