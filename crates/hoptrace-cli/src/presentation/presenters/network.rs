use crate::presentation::view_models::{CommandResultViewModel, NetworkViewModel};
use hoptrace_runtime::NetworkInfo;

pub fn present_network_info(info: NetworkInfo) -> CommandResultViewModel<NetworkViewModel> {
    let label = format!("Host {}", info.hostname);
    let content = NetworkViewModel {
        ip_addresses: info.ip_addresses,
        default_route: info.default_route,
        external_ip: info.external_ip,
        hostname: info.hostname,
        timestamp: info.timestamp,
    };
    CommandResultViewModel::info(content, label)
}
