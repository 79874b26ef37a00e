use hoptrace_types::{DiagnosticRun, HopObservation, HopRecord, RunId, TIMEOUT_IP, UNKNOWN_NODE};
use serde::{Deserialize, Serialize};

/// Timeout and unknown-node markers written by older front-ends.
const LEGACY_TIMEOUT_IPS: &[&str] = &["Таймаут"];
const LEGACY_UNKNOWN_NODES: &[&str] = &["Неизвестный узел"];

/// A run as read back from a store, with its row id and save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRun {
    pub id: RunId,
    /// Save time as written (RFC 3339 for rows written by hoptrace).
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub run: DiagnosticRun,
}

/// One `hops` / `path_hops` row exactly as stored.
#[derive(Debug, Clone)]
pub(crate) struct HopRow {
    pub hop_number: Option<i64>,
    pub hostname: Option<String>,
    pub ip_address: Option<String>,
    pub rtts: [Option<f64>; 3],
}

impl HopRow {
    /// Wire-shape record with read-time normalization applied.
    pub fn to_record(&self) -> HopRecord {
        let mut ip = self.ip_address.clone().unwrap_or_default();
        if LEGACY_TIMEOUT_IPS.contains(&ip.trim()) {
            ip = TIMEOUT_IP.to_string();
        }
        let mut hostname = self.hostname.clone().unwrap_or_default();
        if LEGACY_UNKNOWN_NODES.contains(&hostname.trim()) {
            hostname = UNKNOWN_NODE.to_string();
        }

        let [rtt1, rtt2, rtt3] = self.rtts.map(|rtt| rtt.map(|v| v.to_string()));
        let mut record = HopRecord {
            hop: self.hop_number.map(|n| n.to_string()).unwrap_or_default(),
            hostname,
            ip,
            rtt1,
            rtt2,
            rtt3,
        };
        record.normalize_legacy_timeout();
        record
    }

    /// Typed hop; rows without a usable hop number are dropped.
    pub fn to_observation(&self) -> Option<HopObservation> {
        self.to_record().to_observation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoptrace_types::NO_HOSTNAME;

    fn row(hostname: Option<&str>, ip: Option<&str>, rtts: [Option<f64>; 3]) -> HopRow {
        HopRow {
            hop_number: Some(3),
            hostname: hostname.map(String::from),
            ip_address: ip.map(String::from),
            rtts,
        }
    }

    #[test]
    fn test_blank_row_reads_as_timeout() {
        let record = row(None, Some("N/A"), [None; 3]).to_record();
        assert_eq!(record.ip, TIMEOUT_IP);
        assert_eq!(record.hostname, NO_HOSTNAME);
    }

    #[test]
    fn test_legacy_markers_are_mapped() {
        let record = row(Some("Неизвестный узел"), Some("Таймаут"), [None; 3]).to_record();
        assert_eq!(record.ip, TIMEOUT_IP);
        assert_eq!(record.hostname, UNKNOWN_NODE);
    }

    #[test]
    fn test_measured_row_is_untouched() {
        let hop = row(Some("gw"), Some("N/A"), [Some(1.5), None, None])
            .to_observation()
            .unwrap();
        assert_eq!(hop.ip_address, "N/A");
        assert_eq!(hop.rtt1, Some(1.5));
    }

    #[test]
    fn test_row_without_hop_number_is_dropped() {
        let mut r = row(Some("gw"), Some("10.0.0.1"), [Some(1.0); 3]);
        r.hop_number = None;
        assert!(r.to_observation().is_none());
    }
}
