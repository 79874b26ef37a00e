use hoptrace_types::PathSnapshot;
use serde::Serialize;

/// Shape of the accumulated route to one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetSummary {
    pub target: String,
    /// Highest hop number with any observation.
    pub depth: u32,
    /// Hop positions that have an entry.
    pub known_hops: usize,
    /// Hop positions where more than one address answered (load balancing,
    /// route changes).
    pub branching_hops: Vec<u32>,
}

pub fn summarize(snapshot: &PathSnapshot) -> Vec<TargetSummary> {
    snapshot
        .iter()
        .map(|(target, views)| TargetSummary {
            target: target.clone(),
            depth: views.iter().map(|v| v.hop_number).max().unwrap_or(0),
            known_hops: views.len(),
            branching_hops: views
                .iter()
                .filter(|v| v.ips.len() > 1)
                .map(|v| v.hop_number)
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathTree;
    use hoptrace_types::HopObservation;

    #[test]
    fn test_summary_reports_branching() {
        let mut tree = PathTree::new();
        let rtt = [Some(1.0), None, None];
        tree.accumulate("t", &[HopObservation::new(1, "gw", "10.0.0.1", rtt)]);
        tree.accumulate(
            "t",
            &[
                HopObservation::new(2, "a", "10.1.0.1", rtt),
                HopObservation::new(5, "far", "10.5.0.1", rtt),
            ],
        );
        tree.accumulate("t", &[HopObservation::new(2, "b", "10.1.0.2", rtt)]);

        let summary = summarize(&tree.snapshot());
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].depth, 5);
        assert_eq!(summary[0].known_hops, 3);
        assert_eq!(summary[0].branching_hops, [2]);
    }
}
