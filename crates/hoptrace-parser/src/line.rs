use hoptrace_types::{HopObservation, NO_HOSTNAME, UNKNOWN_IP};
use regex::Captures;
use serde::Serialize;
use std::fmt;

use crate::patterns::{
    ALL_STARS, BARE_IP, BRACKETED_IP, DIGITS, DOTTED_QUAD, HOST_IP_ONE_RTT, HOST_IP_THREE_RTT,
    MIXED, NUMBERED_LINE, PAREN_IP, RTT_MS, TIMEOUT_LINE, WINDOWS_LINE,
};

/// How a single line of tool output was understood.
///
/// Classification runs in declaration order and the first kind that
/// recognises a line wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Blank,
    Header,
    /// Explicit timeout phrase after the hop number.
    Timeout,
    /// One of the Linux `traceroute` layouts.
    Measured,
    /// Windows `tracert` layout with a trailing host descriptor.
    Windows,
    /// Numbered line no other layout matched.
    Generic,
    Unrecognized,
}

impl LineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Blank => "blank",
            LineKind::Header => "header",
            LineKind::Timeout => "timeout",
            LineKind::Measured => "measured",
            LineKind::Windows => "windows",
            LineKind::Generic => "generic",
            LineKind::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const HEADER_PREFIXES: &[&str] = &["traceroute", "tracert", "tracing route to", "over a maximum"];

/// Classify one physical line, producing a hop when the kind carries one.
pub(crate) fn classify(raw_line: &str) -> (LineKind, Option<HopObservation>) {
    let line = raw_line.trim();
    if line.is_empty() {
        return (LineKind::Blank, None);
    }
    if is_header(line) {
        return (LineKind::Header, None);
    }
    if let Some(hop) = timeout_line(raw_line) {
        return (LineKind::Timeout, Some(hop));
    }
    if let Some(hop) = measured_line(line) {
        return (LineKind::Measured, Some(hop));
    }
    if let Some(hop) = windows_line(raw_line) {
        return (LineKind::Windows, Some(hop));
    }
    if let Some(hop) = generic_line(line) {
        return (LineKind::Generic, Some(hop));
    }
    (LineKind::Unrecognized, None)
}

fn is_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    HEADER_PREFIXES.iter().any(|p| lower.starts_with(p))
}

fn timeout_line(raw_line: &str) -> Option<HopObservation> {
    let caps = TIMEOUT_LINE.captures(raw_line)?;
    Some(HopObservation::timeout(hop_number(&caps)?))
}

fn measured_line(line: &str) -> Option<HopObservation> {
    if let Some(caps) = HOST_IP_THREE_RTT.captures(line) {
        return Some(HopObservation::new(
            hop_number(&caps)?,
            &caps[2],
            &caps[3],
            [rtt(&caps, 4), rtt(&caps, 5), rtt(&caps, 6)],
        ));
    }

    if let Some(caps) = ALL_STARS.captures(line) {
        return Some(HopObservation::timeout(hop_number(&caps)?));
    }

    if let Some(caps) = MIXED.captures(line) {
        let hop = hop_number(&caps)?;
        let host = &caps[2];
        let addr = &caps[3];
        if host == NO_HOSTNAME && addr == NO_HOSTNAME {
            return Some(HopObservation::timeout(hop));
        }
        let (hostname, ip) = split_host_and_ip(host, addr);
        return Some(HopObservation::new(
            hop,
            hostname,
            ip,
            [rtt(&caps, 4), rtt(&caps, 5), rtt(&caps, 6)],
        ));
    }

    if let Some(caps) = HOST_IP_ONE_RTT.captures(line) {
        return Some(HopObservation::new(
            hop_number(&caps)?,
            &caps[2],
            &caps[3],
            [rtt(&caps, 4), None, None],
        ));
    }

    if let Some(caps) = BARE_IP.captures(line) {
        let ip = &caps[2];
        return Some(HopObservation::new(
            hop_number(&caps)?,
            ip,
            ip,
            [rtt(&caps, 3), rtt(&caps, 4), rtt(&caps, 5)],
        ));
    }

    None
}

/// Resolve the host and address slots of the mixed layout.
///
/// The address slot is `*`, `(ip)`, or `name (ip)`; a bare dotted token in the
/// host slot is never promoted to an address.
fn split_host_and_ip(host: &str, addr: &str) -> (String, String) {
    let mut hostname = host.to_string();
    let ip = if let Some(caps) = PAREN_IP.captures(addr) {
        let name = addr[..caps.get(0).map_or(0, |m| m.start())].trim();
        if hostname == NO_HOSTNAME && !name.is_empty() {
            hostname = name.to_string();
        }
        caps[1].to_string()
    } else if addr != NO_HOSTNAME && addr.contains('.') {
        addr.to_string()
    } else {
        UNKNOWN_IP.to_string()
    };
    (hostname, ip)
}

fn windows_line(raw_line: &str) -> Option<HopObservation> {
    let caps = WINDOWS_LINE.captures(raw_line)?;
    let hop = hop_number(&caps)?;
    let rtts = [2, 3, 4].map(|i| {
        DIGITS
            .find(&caps[i])
            .and_then(|m| m.as_str().parse::<f64>().ok())
    });

    let descriptor = caps[5].trim();
    let (hostname, ip) = if let Some(bracket) = BRACKETED_IP.captures(descriptor) {
        let name = descriptor
            .split('[')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_end_matches('.');
        (name.to_string(), Some(bracket[1].to_string()))
    } else {
        match last_dotted_quad(descriptor) {
            Some(ip) if ip == descriptor => (NO_HOSTNAME.to_string(), Some(ip.to_string())),
            Some(ip) => (descriptor.to_string(), Some(ip.to_string())),
            None => (descriptor.to_string(), None),
        }
    };

    let hostname = if hostname.is_empty() {
        NO_HOSTNAME.to_string()
    } else {
        hostname
    };
    Some(HopObservation::new(
        hop,
        hostname,
        ip.unwrap_or_else(|| UNKNOWN_IP.to_string()),
        rtts,
    ))
}

/// The last dotted quad in `text`, provided no digit follows it.
fn last_dotted_quad(text: &str) -> Option<&str> {
    let found = DOTTED_QUAD.find_iter(text).last()?;
    if text[found.end()..].chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(found.as_str())
}

fn generic_line(line: &str) -> Option<HopObservation> {
    let caps = NUMBERED_LINE.captures(line)?;
    let hop = hop_number(&caps)?;
    let rest = &caps[2];

    if rest.contains('*') {
        return Some(HopObservation::timeout(hop));
    }

    let ip = DOTTED_QUAD.find(rest).map(|m| m.as_str().to_string());
    let mut rtts = [None; 3];
    for (slot, caps) in rtts.iter_mut().zip(RTT_MS.captures_iter(rest)) {
        *slot = parse_rtt(&caps[1]);
    }

    let (hostname, ip) = match ip {
        Some(ip) => (ip.clone(), ip),
        None => (NO_HOSTNAME.to_string(), UNKNOWN_IP.to_string()),
    };
    Some(HopObservation::new(hop, hostname, ip, rtts))
}

fn hop_number(caps: &Captures<'_>) -> Option<u32> {
    caps.get(1)?.as_str().parse().ok()
}

fn rtt(caps: &Captures<'_>, index: usize) -> Option<f64> {
    caps.get(index).and_then(|m| parse_rtt(m.as_str()))
}

fn parse_rtt(text: &str) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
