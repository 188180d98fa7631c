//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::Application(e) => match e {
                ApplicationError::Parse { .. } | ApplicationError::DepthExceeded { .. } => {
                    crate::exitcode::DATAERR
                }
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Domain(DomainError::UnsupportedOperation { .. })
                | ApplicationError::Domain(DomainError::CycleDetected) => {
                    crate::exitcode::SOFTWARE
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let parse = CliError::from(ApplicationError::Parse {
            position: 0,
            message: "bad".into(),
        });
        assert_eq!(parse.exit_code(), crate::exitcode::DATAERR);

        let config = CliError::from(ApplicationError::Config {
            message: "bad".into(),
        });
        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);

        let domain = CliError::from(ApplicationError::from(DomainError::CycleDetected));
        assert_eq!(domain.exit_code(), crate::exitcode::SOFTWARE);

        assert_eq!(
            CliError::InvalidArgs("x".into()).exit_code(),
            crate::exitcode::USAGE
        );
    }
}
