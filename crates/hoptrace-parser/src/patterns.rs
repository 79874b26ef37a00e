use regex::Regex;
use std::sync::LazyLock;

/// `N ... Request timed out.` and its localized forms.
pub(crate) static TIMEOUT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(\d+).*(Request timed out\.|Превышен.*ожидания|Время ожидания истекло)",
    )
    .unwrap()
});

/// `N host (ip) r ms r ms r ms`
pub(crate) static HOST_IP_THREE_RTT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(\d+)\s+([\w.-]+)\s+\(([\d.]+)\)\s+([\d.]+)\s+ms\s+([\d.]+)\s+ms\s+([\d.]+)\s+ms",
    )
    .unwrap()
});

/// `N * * *`
pub(crate) static ALL_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s+\*\s+\*\s+\*").unwrap());

/// `N (host|*) (*|(ip)|host (ip)) (r ms|*) (r ms|*) (r ms|*)`
pub(crate) static MIXED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(\d+)\s+(\*|[\w.-]+)\s+(\*|\([\d.]+\)|[\w.-]+\s+\([\d.]+\))\s+(?:\*|([\d.]+)\s+ms)\s+(?:\*|([\d.]+)\s+ms)\s+(?:\*|([\d.]+)\s+ms)",
    )
    .unwrap()
});

/// `N host (ip) r ms`
pub(crate) static HOST_IP_ONE_RTT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s+([\w.-]+)\s+\(([\d.]+)\)\s+([\d.]+)\s+ms").unwrap()
});

/// `N ip r ms [r ms] [r ms]` as printed by `traceroute -n`.
pub(crate) static BARE_IP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(\d+)\s+(\d{1,3}(?:\.\d{1,3}){3})\s+([\d.]+)\s+ms(?:\s+(\*|[\d.]+)(?:\s+ms)?)?(?:\s+(\*|[\d.]+)(?:\s+ms)?)?",
    )
    .unwrap()
});

/// `N <a ms <b ms <c ms descriptor`. A `*` in any field is left to the
/// generic fallback.
pub(crate) static WINDOWS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(\d+)\s+(<?\s*\d+\s*ms)\s+(<?\s*\d+\s*ms)\s+(<?\s*\d+\s*ms)\s+(.+)$",
    )
    .unwrap()
});

/// Any line that starts with a hop number.
pub(crate) static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s+(.*)$").unwrap());

pub(crate) static BRACKETED_IP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([\d.]+)\]").unwrap());

pub(crate) static DOTTED_QUAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,3}(?:\.\d{1,3}){3}").unwrap());

pub(crate) static PAREN_IP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([\d.]+)\)").unwrap());

pub(crate) static RTT_MS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d.]+)\s*ms").unwrap());

pub(crate) static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());
