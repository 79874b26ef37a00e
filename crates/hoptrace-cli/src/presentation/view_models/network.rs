use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NetworkViewModel {
    pub ip_addresses: String,
    pub default_route: String,
    pub external_ip: String,
    pub hostname: String,
    pub timestamp: String,
}
