pub mod config;
pub mod history;
pub mod network;
pub mod parse;
pub mod paths;
pub mod run;

pub use config::{present_config, present_config_init};
pub use history::{present_cleared, present_deleted, present_run_detail, present_run_list};
pub use network::present_network_info;
pub use parse::present_parse;
pub use paths::{present_path_tree, present_paths_reset};
pub use run::{present_batch, present_command};

use crate::presentation::view_models::HopRowViewModel;
use hoptrace_types::{HopObservation, HopRecord};

pub(crate) fn hop_rows(hops: &[HopObservation]) -> Vec<HopRowViewModel> {
    hops.iter()
        .map(|hop| {
            let record = HopRecord::from(hop);
            HopRowViewModel {
                hop: record.hop,
                hostname: record.hostname,
                ip: record.ip,
                rtt1: record.rtt1,
                rtt2: record.rtt2,
                rtt3: record.rtt3,
            }
        })
        .collect()
}
