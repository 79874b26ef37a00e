//! Mapping of failures to an exit code and a machine-readable payload.

use crate::presentation::formatters::style;
use crate::types::OutputFormat;
use hoptrace_runtime::Error as RuntimeError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStatus {
    ClientError,
    Forbidden,
    NotFound,
    ServerError,
}

impl FailureStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            FailureStatus::ServerError => 1,
            FailureStatus::ClientError | FailureStatus::Forbidden | FailureStatus::NotFound => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub error: String,
    pub status: FailureStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_commands: Option<Vec<String>>,
}

impl Failure {
    pub fn from_error(err: &anyhow::Error) -> Self {
        let error = err.to_string();

        if let Some(runtime) = err.downcast_ref::<RuntimeError>() {
            return match runtime {
                RuntimeError::Validation(validation) if validation.is_forbidden() => Self {
                    error,
                    status: FailureStatus::Forbidden,
                    allowed_commands: validation.allowed_commands().map(<[String]>::to_vec),
                },
                RuntimeError::NotFound(_) => Self::plain(error, FailureStatus::NotFound),
                other if other.is_client_error() => Self::plain(error, FailureStatus::ClientError),
                _ => Self::plain(error, FailureStatus::ServerError),
            };
        }

        if let Some(io) = err.downcast_ref::<std::io::Error>()
            && io.kind() == std::io::ErrorKind::NotFound
        {
            return Self::plain(format!("{:#}", err), FailureStatus::NotFound);
        }

        Self::plain(format!("{:#}", err), FailureStatus::ServerError)
    }

    fn plain(error: String, status: FailureStatus) -> Self {
        Self {
            error,
            status,
            allowed_commands: None,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }

    /// JSON payload on stdout, or a readable message on stderr.
    pub fn report(&self, format: OutputFormat) {
        match format {
            OutputFormat::Json => match serde_json::to_string_pretty(self) {
                Ok(json) => println!("{}", json),
                Err(_) => eprintln!("Error: {}", self.error),
            },
            OutputFormat::Text => {
                eprintln!("{} {}", style::error_label(), self.error);
                if let Some(allowed) = &self.allowed_commands {
                    eprintln!("Allowed commands: {}", allowed.join(", "));
                }
            }
        }
    }
}
