use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything ever observed at one hop position for a target.
///
/// `nodes` and `ips` are sets rendered as lists; their order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopNodeView {
    pub hop_number: u32,
    pub nodes: Vec<String>,
    pub ips: Vec<String>,
}

/// Path tree snapshot: target → hop views in ascending hop order.
pub type PathSnapshot = BTreeMap<String, Vec<HopNodeView>>;
