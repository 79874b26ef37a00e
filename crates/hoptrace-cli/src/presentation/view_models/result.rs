//! The envelope every successful command prints.
//!
//! JSON mode serializes it as `{badge, content, suggestions}`. Text mode shows
//! the badge as a status line above the content and the suggestions as a
//! list of follow-up commands.

use serde::Serialize;

use super::history::RunScope;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    /// The command ran but produced less than asked for (timeout, no hops).
    Warning,
}

impl StatusLevel {
    pub fn marker(self) -> &'static str {
        match self {
            StatusLevel::Success => "[ok]",
            StatusLevel::Info => "[--]",
            StatusLevel::Warning => "[!!]",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    /// Badge for a finished tool run. A timeout or a non-zero exit code
    /// outranks whatever was parsed.
    pub fn for_tool_run(timed_out: bool, return_code: i32, hops: Option<usize>) -> Self {
        let (level, label) = if timed_out {
            (StatusLevel::Warning, "Command timed out".to_string())
        } else if return_code != 0 {
            (
                StatusLevel::Warning,
                format!("Exited with code {}", return_code),
            )
        } else if let Some(count) = hops {
            (StatusLevel::Success, count_label(count, "hop"))
        } else {
            (StatusLevel::Success, "Done".to_string())
        };
        Self { level, label }
    }
}

/// A follow-up command worth running next.
#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub description: String,
    pub command: String,
}

/// `1 hop`, `3 hops`.
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    pub badge: StatusBadge,
    pub content: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn with_badge(content: T, badge: StatusBadge) -> Self {
        Self {
            badge,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn success(content: T, label: impl Into<String>) -> Self {
        Self::leveled(content, StatusLevel::Success, label)
    }

    pub fn info(content: T, label: impl Into<String>) -> Self {
        Self::leveled(content, StatusLevel::Info, label)
    }

    pub fn warning(content: T, label: impl Into<String>) -> Self {
        Self::leveled(content, StatusLevel::Warning, label)
    }

    fn leveled(content: T, level: StatusLevel, label: impl Into<String>) -> Self {
        Self::with_badge(
            content,
            StatusBadge {
                level,
                label: label.into(),
            },
        )
    }

    pub fn suggest(mut self, description: impl Into<String>, command: impl Into<String>) -> Self {
        self.suggestions.push(Guidance {
            description: description.into(),
            command: command.into(),
        });
        self
    }

    /// Point at the stored copy of a run, when it was saved.
    pub fn saved_run(self, scope: RunScope, id: Option<i64>) -> Self {
        match id {
            Some(id) => self.suggest("Saved run", scope.show_command(id)),
            None => self,
        }
    }
}
