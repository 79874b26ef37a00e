//! Rewrites an operator command into the argument vector for the local OS.
//!
//! Only the route-tracing family is rewritten. `traceroute` (Unix) and
//! `tracert` (Windows) are treated as one operation; flags are mapped between
//! the two dialects:
//!
//! | meaning        | Unix            | Windows          |
//! |----------------|-----------------|------------------|
//! | numeric output | `-n`            | `-d`             |
//! | max hops       | `-m <n>`        | `-h <n>`         |
//! | probe wait     | `-w <seconds>`  | `-w <millis>`    |
//!
//! The wait value is read in the units of the tool name the operator typed and
//! written in the units of the platform the command will run on. Flags whose
//! value is missing or malformed are dropped. Unknown flags are dropped too.

use hoptrace_types::Platform;
use tracing::debug;

/// Tool families the translator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolFamily {
    /// `traceroute` / `tracert`
    Trace,
    /// `dig` / `nslookup` / `whois`; passed through untouched
    Lookup,
}

impl ToolFamily {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "traceroute" | "tracert" => Some(ToolFamily::Trace),
            "dig" | "nslookup" | "whois" => Some(ToolFamily::Lookup),
            _ => None,
        }
    }

    /// Dialect implied by the tool name, used to read wait values.
    fn dialect_of(name: &str) -> Platform {
        if name.eq_ignore_ascii_case("tracert") {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Binary that performs route tracing on `platform`.
pub fn trace_binary(platform: Platform) -> &'static str {
    match platform {
        Platform::Unix => "traceroute",
        Platform::Windows => "tracert",
    }
}

/// Per-probe wait, held in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitTime(u64);

impl WaitTime {
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.max(1))
    }

    pub fn millis(&self) -> u64 {
        self.0
    }

    /// Parse a wait value written in `dialect` units.
    pub fn parse(value: &str, dialect: Platform) -> Option<Self> {
        match dialect {
            Platform::Unix => {
                let seconds: f64 = value.parse().ok()?;
                if !seconds.is_finite() || seconds <= 0.0 {
                    return None;
                }
                Some(Self::from_millis((seconds * 1000.0).floor() as u64))
            }
            Platform::Windows => value.parse::<u64>().ok().map(Self::from_millis),
        }
    }

    /// Render in `platform` units; never below 1.
    pub fn render(&self, platform: Platform) -> String {
        match platform {
            Platform::Unix => ((self.0 as f64 / 1000.0).round() as u64).max(1).to_string(),
            Platform::Windows => self.0.to_string(),
        }
    }
}

#[derive(Debug, Default)]
struct TraceFlags<'a> {
    numeric: bool,
    max_hops: Option<u32>,
    wait: Option<WaitTime>,
    target: Option<&'a str>,
}

impl<'a> TraceFlags<'a> {
    fn scan(args: &[&'a str], dialect: Platform) -> Self {
        let mut flags = TraceFlags::default();
        let mut i = 0;

        while i < args.len() {
            let arg = args[i];
            match arg {
                "-n" | "-d" => flags.numeric = true,
                "-m" | "-h" | "-w" => {
                    let value = args.get(i + 1).copied().filter(|v| !v.starts_with('-'));
                    if let Some(value) = value {
                        i += 1;
                        if arg == "-w" {
                            flags.wait = WaitTime::parse(value, dialect);
                        } else {
                            flags.max_hops = value.parse::<u32>().ok().filter(|n| *n > 0);
                        }
                    }
                }
                _ if arg.starts_with('-') => debug!(flag = arg, "dropping unsupported flag"),
                _ => {
                    if flags.target.is_none() {
                        flags.target = Some(arg);
                    }
                }
            }
            i += 1;
        }

        flags
    }

    fn render(&self, platform: Platform) -> Vec<String> {
        let mut out = vec![trace_binary(platform).to_string()];

        if self.numeric {
            out.push(
                match platform {
                    Platform::Unix => "-n",
                    Platform::Windows => "-d",
                }
                .to_string(),
            );
        }

        if let Some(max_hops) = self.max_hops {
            let flag = match platform {
                Platform::Unix => "-m",
                Platform::Windows => "-h",
            };
            out.push(flag.to_string());
            out.push(max_hops.to_string());
        }

        if let Some(wait) = self.wait {
            out.push("-w".to_string());
            out.push(wait.render(platform));
        }

        if let Some(target) = self.target {
            out.push(target.to_string());
        }

        out
    }
}

/// Rewrite `raw_command` into an argument vector for `platform`.
///
/// Commands outside the tracing family come back as their whitespace tokens.
/// An empty command yields an empty vector.
pub fn translate(raw_command: &str, platform: Platform) -> Vec<String> {
    let tokens: Vec<&str> = raw_command.split_whitespace().collect();
    let Some((tool, args)) = tokens.split_first() else {
        return Vec::new();
    };

    if ToolFamily::from_name(tool) != Some(ToolFamily::Trace) {
        return tokens.iter().map(|t| t.to_string()).collect();
    }

    let flags = TraceFlags::scan(args, ToolFamily::dialect_of(tool));
    let argv = flags.render(platform);
    debug!(?argv, %platform, "translated trace command");
    argv
}
