use serde::{Deserialize, Serialize};

/// Hostname placeholder for hops without a resolved reverse name.
pub const NO_HOSTNAME: &str = "*";

/// IP placeholder when the tool printed no address for a hop.
pub const UNKNOWN_IP: &str = "N/A";

/// IP placeholder for hops where no probe answered.
pub const TIMEOUT_IP: &str = "timeout";

/// Marker stored for nodes that could not be named at all.
pub const UNKNOWN_NODE: &str = "unknown";

/// Returns true for placeholder values that carry no path information.
///
/// Empty strings count as placeholders too.
pub fn is_sentinel(value: &str) -> bool {
    let value = value.trim();
    value.is_empty()
        || value == NO_HOSTNAME
        || value == UNKNOWN_IP
        || value == TIMEOUT_IP
        || value == UNKNOWN_NODE
}

/// One measured or timed-out hop from a single diagnostic run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HopObservation {
    /// Hop index exactly as the tool reported it.
    pub hop_number: u32,
    /// Reverse name, or [`NO_HOSTNAME`].
    pub hostname: String,
    /// Address, or [`UNKNOWN_IP`] / [`TIMEOUT_IP`].
    pub ip_address: String,
    pub rtt1: Option<f64>,
    pub rtt2: Option<f64>,
    pub rtt3: Option<f64>,
}

impl HopObservation {
    pub fn new(
        hop_number: u32,
        hostname: impl Into<String>,
        ip_address: impl Into<String>,
        rtts: [Option<f64>; 3],
    ) -> Self {
        let [rtt1, rtt2, rtt3] = rtts;
        Self {
            hop_number,
            hostname: hostname.into(),
            ip_address: ip_address.into(),
            rtt1,
            rtt2,
            rtt3,
        }
    }

    /// A hop where no probe came back.
    pub fn timeout(hop_number: u32) -> Self {
        Self::new(hop_number, NO_HOSTNAME, TIMEOUT_IP, [None, None, None])
    }

    pub fn rtts(&self) -> [Option<f64>; 3] {
        [self.rtt1, self.rtt2, self.rtt3]
    }

    pub fn is_full_timeout(&self) -> bool {
        self.rtts().iter().all(Option::is_none)
    }

    /// Fastest answered probe, if any.
    pub fn best_rtt(&self) -> Option<f64> {
        self.rtts().into_iter().flatten().reduce(f64::min)
    }

    pub fn to_record(&self) -> HopRecord {
        HopRecord::from(self)
    }
}

/// Stringly shape of a hop used when hops cross a process or storage boundary.
///
/// Mirrors the JSON exchanged with front-ends: hop number and RTTs are
/// strings, absent RTTs are `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopRecord {
    pub hop: String,
    pub hostname: String,
    pub ip: String,
    pub rtt1: Option<String>,
    pub rtt2: Option<String>,
    pub rtt3: Option<String>,
}

impl HopRecord {
    /// Hop number parsed from the string form; `None` when it is not an integer.
    pub fn hop_number(&self) -> Option<u32> {
        self.hop.trim().parse().ok()
    }

    /// Rewrite legacy rows that predate the explicit timeout sentinel.
    ///
    /// A hop with no RTTs and an empty or `N/A` address is a timeout: its IP
    /// becomes [`TIMEOUT_IP`] and a blank hostname becomes [`NO_HOSTNAME`].
    pub fn normalize_legacy_timeout(&mut self) {
        let no_rtts = [&self.rtt1, &self.rtt2, &self.rtt3]
            .iter()
            .all(|rtt| is_blank_rtt(rtt.as_deref()));
        let ip = self.ip.trim();
        let ip_unknown = ip.is_empty() || ip.eq_ignore_ascii_case(UNKNOWN_IP);

        if no_rtts && ip_unknown {
            self.ip = TIMEOUT_IP.to_string();
            if self.hostname.trim().is_empty() {
                self.hostname = NO_HOSTNAME.to_string();
            }
        }
    }

    /// Typed view of this record. Returns `None` when the hop number is not an integer.
    pub fn to_observation(&self) -> Option<HopObservation> {
        let hop_number = self.hop_number()?;
        Some(HopObservation::new(
            hop_number,
            self.hostname.clone(),
            self.ip.clone(),
            [
                parse_rtt(self.rtt1.as_deref()),
                parse_rtt(self.rtt2.as_deref()),
                parse_rtt(self.rtt3.as_deref()),
            ],
        ))
    }
}

impl From<&HopObservation> for HopRecord {
    fn from(hop: &HopObservation) -> Self {
        Self {
            hop: hop.hop_number.to_string(),
            hostname: hop.hostname.clone(),
            ip: hop.ip_address.clone(),
            rtt1: hop.rtt1.map(|v| v.to_string()),
            rtt2: hop.rtt2.map(|v| v.to_string()),
            rtt3: hop.rtt3.map(|v| v.to_string()),
        }
    }
}

fn is_blank_rtt(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "" | "none" | "null" | "undefined"
        ),
    }
}

fn parse_rtt(value: Option<&str>) -> Option<f64> {
    value?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
