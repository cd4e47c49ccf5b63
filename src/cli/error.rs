//! CLI-level errors (wraps domain and config errors)

use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::{DomainError, ParseError};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot decode tree: {0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("cannot read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse(_) => crate::exitcode::DATAERR,
            CliError::Domain(DomainError::InvalidCodec(_)) => crate::exitcode::CONFIG,
            CliError::Domain(DomainError::InvalidPath(_)) => crate::exitcode::USAGE,
            CliError::Domain(_) => crate::exitcode::DATAERR,
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Io(_) => crate::exitcode::IOERR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exitcode;

    #[test]
    fn malformed_tree_is_a_data_error() {
        let err = CliError::from(ParseError::UnexpectedEnd { consumed: 1 });
        assert_eq!(err.exit_code(), exitcode::DATAERR);
        assert!(err.to_string().starts_with("cannot decode tree"));
    }

    #[test]
    fn malformed_path_is_a_usage_error() {
        let err = CliError::from(DomainError::InvalidPath("LX".into()));
        assert_eq!(err.exit_code(), exitcode::USAGE);
    }

    #[test]
    fn bad_codec_is_a_config_error() {
        let err = CliError::from(DomainError::InvalidCodec("delimiter is empty".into()));
        assert_eq!(err.exit_code(), exitcode::CONFIG);
    }
}
