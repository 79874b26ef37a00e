//! Gatekeeping for operator commands before anything is executed.
//!
//! Only a fixed set of diagnostic tools may run. The set depends on the
//! platform; no shell is involved, so the allow-list is the only boundary.

use hoptrace_types::Platform;
use std::fmt;

/// Longest command accepted for execution.
pub const MAX_COMMAND_LEN: usize = 1024;

/// Default cap on targets in one batch trace.
pub const MAX_BATCH_TARGETS: usize = 50;

const UNIX_ALLOWED: &[&str] = &["traceroute", "dig", "nslookup", "whois"];
const WINDOWS_ALLOWED: &[&str] = &["tracert", "nslookup"];

/// What kind of output a command produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    /// Route tracing; output is parsed into hops.
    Traceroute,
    /// Name lookup; output is passed through as text.
    Dns,
}

impl CommandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Traceroute => "traceroute",
            CommandType::Dns => "dns",
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a command or batch request is rejected before execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingCommand,
    EmptyCommand,
    CommandTooLong { max: usize },
    NotAllowed { allowed: Vec<String> },
    /// A batch target that would be read as a flag or split into several tokens.
    InvalidTargets { target: String },
    NoTargets,
    TooManyTargets { max: usize },
}

impl ValidationError {
    /// Disallowed tools are refused rather than malformed.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, ValidationError::NotAllowed { .. })
    }

    /// Allow-list to show alongside a refusal.
    pub fn allowed_commands(&self) -> Option<&[String]> {
        match self {
            ValidationError::NotAllowed { allowed } => Some(allowed),
            _ => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingCommand => write!(f, "No command provided"),
            ValidationError::EmptyCommand => write!(f, "Empty command"),
            ValidationError::CommandTooLong { .. } => write!(f, "Command too long"),
            ValidationError::NotAllowed { .. } => write!(f, "Command not allowed"),
            ValidationError::InvalidTargets { target } => write!(f, "Invalid target: {}", target),
            ValidationError::NoTargets => write!(f, "No targets provided"),
            ValidationError::TooManyTargets { max } => {
                write!(f, "Too many targets (max {})", max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A command that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCommand {
    /// Trimmed command text.
    pub command: String,
    pub command_type: CommandType,
}

/// Allow-list and size limits for one platform.
#[derive(Debug, Clone)]
pub struct CommandPolicy {
    platform: Platform,
    max_len: usize,
    max_targets: usize,
}

impl CommandPolicy {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            max_len: MAX_COMMAND_LEN,
            max_targets: MAX_BATCH_TARGETS,
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn with_max_targets(mut self, max_targets: usize) -> Self {
        self.max_targets = max_targets;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn allowed_commands(&self) -> &'static [&'static str] {
        match self.platform {
            Platform::Unix => UNIX_ALLOWED,
            Platform::Windows => WINDOWS_ALLOWED,
        }
    }

    /// Check a raw command. `None` means the caller supplied no command at all.
    pub fn validate(&self, command: Option<&str>) -> Result<ValidatedCommand, ValidationError> {
        let command = command.ok_or(ValidationError::MissingCommand)?.trim();
        if command.is_empty() {
            return Err(ValidationError::EmptyCommand);
        }
        if command.chars().count() > self.max_len {
            return Err(ValidationError::CommandTooLong { max: self.max_len });
        }

        let tool = command
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if !self.allowed_commands().contains(&tool.as_str()) {
            return Err(ValidationError::NotAllowed {
                allowed: self
                    .allowed_commands()
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
            });
        }

        let command_type = match tool.as_str() {
            "traceroute" | "tracert" => CommandType::Traceroute,
            _ => CommandType::Dns,
        };

        Ok(ValidatedCommand {
            command: command.to_string(),
            command_type,
        })
    }

    /// Trim batch targets, drop blanks, and enforce the batch size cap.
    ///
    /// Checks run in order: empty list, then target shape, then batch size.
    pub fn validate_targets<S: AsRef<str>>(
        &self,
        targets: &[S],
    ) -> Result<Vec<String>, ValidationError> {
        let cleaned: Vec<String> = targets
            .iter()
            .map(|t| t.as_ref().trim())
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();

        if cleaned.is_empty() {
            return Err(ValidationError::NoTargets);
        }
        if let Some(bad) = cleaned
            .iter()
            .find(|t| t.starts_with('-') || t.contains(char::is_whitespace))
        {
            return Err(ValidationError::InvalidTargets {
                target: bad.clone(),
            });
        }
        if cleaned.len() > self.max_targets {
            return Err(ValidationError::TooManyTargets {
                max: self.max_targets,
            });
        }
        Ok(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_empty() {
        let policy = CommandPolicy::new(Platform::Unix);
        assert_eq!(policy.validate(None), Err(ValidationError::MissingCommand));
        assert_eq!(policy.validate(Some("   ")), Err(ValidationError::EmptyCommand));
    }

    #[test]
    fn test_too_long() {
        let policy = CommandPolicy::new(Platform::Unix);
        let long = format!("traceroute {}", "a".repeat(MAX_COMMAND_LEN));
        let err = policy.validate(Some(&long)).unwrap_err();
        assert_eq!(err.to_string(), "Command too long");
    }

    #[test]
    fn test_forbidden_carries_allow_list() {
        let policy = CommandPolicy::new(Platform::Unix);
        let err = policy.validate(Some("ls -la")).unwrap_err();
        assert!(err.is_forbidden());
        assert_eq!(err.to_string(), "Command not allowed");
        let allowed = err.allowed_commands().unwrap();
        assert!(allowed.iter().any(|c| c == "traceroute"));
    }

    #[test]
    fn test_windows_allow_list() {
        let policy = CommandPolicy::new(Platform::Windows);
        assert!(policy.validate(Some("dig example.com")).is_err());
        let ok = policy.validate(Some("tracert example.com")).unwrap();
        assert_eq!(ok.command_type, CommandType::Traceroute);
    }

    #[test]
    fn test_prefix_of_allowed_tool_is_rejected() {
        let policy = CommandPolicy::new(Platform::Unix);
        assert!(policy.validate(Some("traceroutex host")).is_err());
    }

    #[test]
    fn test_classification() {
        let policy = CommandPolicy::new(Platform::Unix);
        let trace = policy.validate(Some("  traceroute -n host ")).unwrap();
        assert_eq!(trace.command, "traceroute -n host");
        assert_eq!(trace.command_type, CommandType::Traceroute);

        let dns = policy.validate(Some("whois example.com")).unwrap();
        assert_eq!(dns.command_type, CommandType::Dns);
        assert_eq!(dns.command_type.to_string(), "dns");
    }

    #[test]
    fn test_targets_are_cleaned() {
        let policy = CommandPolicy::new(Platform::Unix);
        let targets = policy
            .validate_targets(&[" 8.8.8.8 ", "", "1.1.1.1"])
            .unwrap();
        assert_eq!(targets, ["8.8.8.8", "1.1.1.1"]);
    }

    #[test]
    fn test_flag_like_target_is_invalid() {
        let policy = CommandPolicy::new(Platform::Unix);
        let err = policy.validate_targets(&["8.8.8.8", "-m"]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid target: -m");
        assert!(policy.validate_targets(&["a b"]).is_err());
    }

    #[test]
    fn test_target_limits() {
        let policy = CommandPolicy::new(Platform::Unix).with_max_targets(2);
        let empty: [&str; 0] = [];
        assert_eq!(policy.validate_targets(&empty), Err(ValidationError::NoTargets));
        assert_eq!(policy.validate_targets(&["  "]), Err(ValidationError::NoTargets));
        assert_eq!(
            policy.validate_targets(&["a", "b", "c"]),
            Err(ValidationError::TooManyTargets { max: 2 })
        );
    }

    #[test]
    fn test_invalid_target_reported_before_batch_size() {
        let policy = CommandPolicy::new(Platform::Unix).with_max_targets(2);
        assert_eq!(
            policy.validate_targets(&["a", "b", "-c", "d"]),
            Err(ValidationError::InvalidTargets {
                target: "-c".to_string()
            })
        );
    }
}
