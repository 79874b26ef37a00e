pub mod common;
pub mod config;
pub mod history;
pub mod network;
pub mod parse;
pub mod paths;
pub mod result;
pub mod run;

pub use common::{ActionViewModel, HopRowViewModel};
pub use config::ConfigViewModel;
pub use history::{RunDetailViewModel, RunEntryViewModel, RunListViewModel, RunScope};
pub use network::NetworkViewModel;
pub use parse::{LineViewModel, ParseViewModel};
pub use paths::{PathHopViewModel, PathTargetViewModel, PathTreeViewModel};
pub use result::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel, count_label};
pub use run::{BatchEntryViewModel, BatchViewModel, CommandViewModel};
