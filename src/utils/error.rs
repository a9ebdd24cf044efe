use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Input file could not be read: {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV at line {line}: {message}")]
    MalformedInput { line: u64, message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Output file could not be written: {}: {source}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Parse,
    Output,
    Config,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn malformed(line: u64, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputNotFound { .. } | Self::InputUnreadable { .. } => ErrorCategory::Input,
            Self::MalformedInput { .. } | Self::CsvError(_) => ErrorCategory::Parse,
            Self::OutputUnwritable { .. } => ErrorCategory::Output,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            Self::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // The input can be fixed and the run repeated as is.
            ErrorCategory::Input | ErrorCategory::Parse => ErrorSeverity::Medium,
            ErrorCategory::Config | ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InputNotFound { .. } => "Check that the CSV file exists at the given path",
            Self::InputUnreadable { .. } => {
                "Check the file permissions and make sure the file is UTF-8 encoded"
            }
            Self::MalformedInput { .. } | Self::CsvError(_) => {
                "Fix the reported line (unbalanced quotes, extra fields or duplicate column names)"
            }
            Self::OutputUnwritable { .. } => {
                "Make sure the output directory exists and is writable"
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the command line arguments"
            }
            Self::SerializationError(_) => "Report this as a bug together with the input file",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InputNotFound { path } => {
                format!("Cannot find input file '{}'", path.display())
            }
            Self::InputUnreadable { path, .. } => {
                format!("Cannot read input file '{}'", path.display())
            }
            Self::MalformedInput { line, message } => {
                format!("The CSV input is malformed at line {}: {}", line, message)
            }
            Self::CsvError(e) => format!("The CSV input could not be parsed: {}", e),
            Self::OutputUnwritable { path, .. } => {
                format!("Cannot write output file '{}'", path.display())
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_input_errors_are_medium_severity() {
        let err = ConvertError::InputNotFound {
            path: PathBuf::from("missing.csv"),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("missing.csv"));
    }

    #[test]
    fn test_output_error_keeps_io_source() {
        let err = ConvertError::OutputUnwritable {
            path: PathBuf::from("/readonly/out.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_malformed_message_names_line() {
        let err = ConvertError::malformed(7, "unterminated quoted field");
        assert_eq!(
            err.to_string(),
            "Malformed CSV at line 7: unterminated quoted field"
        );
        assert_eq!(err.category(), ErrorCategory::Parse);
    }
}
