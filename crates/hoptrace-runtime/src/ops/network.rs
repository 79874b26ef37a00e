use crate::executor::ProcessOutput;
use crate::ops::Context;
use chrono::Local;
use hoptrace_types::{Platform, UNKNOWN_NODE};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

const NO_IP_INFO: &str = "Error getting IP info";
const NO_DEFAULT_ROUTE: &str = "No default route";
const UNKNOWN_EXTERNAL_IP: &str = "Unknown";

const EXTERNAL_IP_TIMEOUT: Duration = Duration::from_secs(5);
const POWERSHELL_TIMEOUT: Duration = Duration::from_secs(8);

/// Snapshot of the local host's network configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInfo {
    /// Raw interface listing.
    pub ip_addresses: String,
    /// Raw routing output for the default route.
    pub default_route: String,
    pub external_ip: String,
    pub hostname: String,
    /// RFC 3339, local time.
    pub timestamp: String,
}

pub struct NetworkOps<'a> {
    ctx: &'a Context,
}

impl<'a> NetworkOps<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    /// Every probe is best effort; failures become placeholder text.
    pub fn info(&self) -> NetworkInfo {
        let windows = self.ctx.platform() == Platform::Windows;

        let ip_addresses = self
            .probe(&["ip", "addr", "show"], None)
            .or_else(|| windows.then(|| self.probe(&["ipconfig", "/all"], None)).flatten())
            .unwrap_or_else(|| NO_IP_INFO.to_string());

        let default_route = self
            .probe(&["ip", "route", "show", "default"], None)
            .or_else(|| windows.then(|| self.probe(&["route", "print"], None)).flatten())
            .unwrap_or_else(|| NO_DEFAULT_ROUTE.to_string());

        let external_ip = self
            .probe(&["curl", "-s", "ifconfig.me"], Some(EXTERNAL_IP_TIMEOUT))
            .or_else(|| {
                windows
                    .then(|| {
                        self.probe(
                            &[
                                "powershell",
                                "-Command",
                                "(Invoke-WebRequest -UseBasicParsing ifconfig.me).Content",
                            ],
                            Some(POWERSHELL_TIMEOUT),
                        )
                    })
                    .flatten()
            })
            .map(|ip| ip.trim().to_string())
            .unwrap_or_else(|| UNKNOWN_EXTERNAL_IP.to_string());

        let hostname = self
            .probe(&["hostname"], None)
            .map(|name| name.trim().to_string())
            .unwrap_or_else(|| UNKNOWN_NODE.to_string());

        NetworkInfo {
            ip_addresses,
            default_route,
            external_ip,
            hostname,
            timestamp: Local::now().to_rfc3339(),
        }
    }

    /// Stdout of a successful run with something on it.
    fn probe(&self, argv: &[&str], timeout: Option<Duration>) -> Option<String> {
        let argv: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
        let output = match timeout {
            Some(timeout) => self.ctx.run(argv.clone(), timeout),
            None => self.ctx.run_default(argv.clone()),
        };
        let stdout = succeeded(&output);
        if stdout.is_none() {
            debug!(?argv, return_code = output.return_code, "network probe failed");
        }
        stdout
    }
}

fn succeeded(output: &ProcessOutput) -> Option<String> {
    if output.return_code != 0 {
        return None;
    }
    output
        .stdout
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(String::from)
}
