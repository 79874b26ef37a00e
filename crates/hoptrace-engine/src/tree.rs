use hoptrace_types::{HopNodeView, HopObservation, PathSnapshot, is_sentinel};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Distinct names and addresses seen at one hop position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct HopNode {
    nodes: BTreeSet<String>,
    ips: BTreeSet<String>,
}

impl HopNode {
    fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.ips.is_empty()
    }
}

/// Union of every route ever observed, keyed by target then hop number.
///
/// Placeholder values (`*`, `N/A`, `timeout`, `unknown`, blanks) never enter
/// the tree, so a hop that only ever timed out has no entry at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTree {
    targets: BTreeMap<String, BTreeMap<u32, HopNode>>,
}

impl PathTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Merge one run's hops into `target`. Re-applying the same hops is a no-op.
    pub fn accumulate(&mut self, target: &str, hops: &[HopObservation]) {
        for hop in hops {
            self.insert_hostname(target, hop.hop_number, &hop.hostname);
            self.insert_ip(target, hop.hop_number, &hop.ip_address);
        }
        debug!(dest = target, hops = hops.len(), "accumulated hops into path tree");
    }

    /// Returns true when `hostname` was new for this hop.
    pub fn insert_hostname(&mut self, target: &str, hop_number: u32, hostname: &str) -> bool {
        if is_sentinel(hostname) {
            return false;
        }
        self.node_mut(target, hop_number)
            .nodes
            .insert(hostname.trim().to_string())
    }

    /// Returns true when `ip` was new for this hop.
    pub fn insert_ip(&mut self, target: &str, hop_number: u32, ip: &str) -> bool {
        if is_sentinel(ip) {
            return false;
        }
        self.node_mut(target, hop_number)
            .ips
            .insert(ip.trim().to_string())
    }

    fn node_mut(&mut self, target: &str, hop_number: u32) -> &mut HopNode {
        self.targets
            .entry(target.to_string())
            .or_default()
            .entry(hop_number)
            .or_default()
    }

    /// Serializable view: target → hops in ascending order.
    pub fn snapshot(&self) -> PathSnapshot {
        self.targets
            .iter()
            .map(|(target, hops)| {
                let views = hops
                    .iter()
                    .filter(|(_, node)| !node.is_empty())
                    .map(|(hop_number, node)| HopNodeView {
                        hop_number: *hop_number,
                        nodes: node.nodes.iter().cloned().collect(),
                        ips: node.ips.iter().cloned().collect(),
                    })
                    .collect();
                (target.clone(), views)
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.targets.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hop(n: u32, host: &str, ip: &str) -> HopObservation {
        HopObservation::new(n, host, ip, [Some(1.0), None, None])
    }

    #[test]
    fn test_sentinels_never_enter_the_tree() {
        let mut tree = PathTree::new();
        tree.accumulate(
            "t",
            &[
                HopObservation::timeout(1),
                hop(2, "*", "N/A"),
                hop(3, "unknown", " "),
            ],
        );
        assert!(tree.is_empty());
        assert!(tree.snapshot().is_empty());
    }

    #[test]
    fn test_accumulate_is_idempotent() {
        let hops = [hop(1, "gw", "10.0.0.1"), hop(2, "isp", "203.0.113.1")];
        let mut once = PathTree::new();
        once.accumulate("t", &hops);

        let mut twice = once.clone();
        twice.accumulate("t", &hops);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_hop_positions_union_across_runs() {
        let mut tree = PathTree::new();
        tree.accumulate("t", &[hop(2, "a", "10.0.0.1")]);
        tree.accumulate("t", &[hop(2, "b", "10.0.0.2"), hop(1, "gw", "192.168.0.1")]);

        let snapshot = tree.snapshot();
        let views = &snapshot["t"];
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].hop_number, 1);
        assert_eq!(views[1].nodes, ["a", "b"]);
        assert_eq!(views[1].ips, ["10.0.0.1", "10.0.0.2"]);
    }

    #[test]
    fn test_hostname_only_hop_is_kept() {
        let mut tree = PathTree::new();
        assert!(tree.insert_hostname("t", 4, "named-only"));
        assert!(!tree.insert_hostname("t", 4, "named-only"));
        let views = &tree.snapshot()["t"];
        assert_eq!(views[0].nodes, ["named-only"]);
        assert!(views[0].ips.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut tree = PathTree::new();
        tree.accumulate("t", &[hop(1, "gw", "10.0.0.1")]);
        tree.reset();
        assert!(tree.is_empty());
    }
}
