use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Operating-system family whose diagnostic tools we drive.
///
/// `Unix` tools take waits in seconds (`traceroute`), `Windows` tools take
/// them in milliseconds (`tracert`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    /// Platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Unix => "unix",
            Platform::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unix" | "linux" | "macos" => Ok(Platform::Unix),
            "windows" | "win" => Ok(Platform::Windows),
            other => Err(Error::UnknownPlatform(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_platform_names() {
        assert_eq!("Linux".parse::<Platform>().unwrap(), Platform::Unix);
        assert_eq!("windows".parse::<Platform>().unwrap(), Platform::Windows);
        assert!("plan9".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_serde_is_lowercase() {
        let json = serde_json::to_string(&Platform::Windows).unwrap();
        assert_eq!(json, "\"windows\"");
    }
}
