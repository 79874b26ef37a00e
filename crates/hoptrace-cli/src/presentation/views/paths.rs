use std::fmt;

use crate::presentation::formatters::{style, text};
use crate::presentation::view_models::PathTreeViewModel;

impl fmt::Display for PathTreeViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, target) in self.targets.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            let branching = if target.branching_hops.is_empty() {
                String::new()
            } else {
                let hops: Vec<String> = target
                    .branching_hops
                    .iter()
                    .map(|h| h.to_string())
                    .collect();
                format!(", branches at {}", hops.join(", "))
            };
            writeln!(
                f,
                "{} {}",
                style::bold(&target.target),
                style::dim(&format!("(depth {}{})", target.depth, branching))
            )?;

            let Some(hops) = &target.hops else {
                continue;
            };
            for (j, hop) in hops.iter().enumerate() {
                let branch = if j + 1 == hops.len() { "└─" } else { "├─" };
                writeln!(
                    f,
                    "{} {:>2}  {}  [{}]",
                    branch,
                    hop.hop,
                    text::list(&hop.nodes),
                    text::list(&hop.ips)
                )?;
            }
        }
        Ok(())
    }
}
