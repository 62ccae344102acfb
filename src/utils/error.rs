use thiserror::Error;

#[derive(Error, Debug)]
pub enum TipError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Batch input is malformed: {message}")]
    BatchFormatError { message: String },

    #[error("Batch row {row} could not be processed: {message}")]
    BatchRowError { row: usize, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl TipError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TipError::ConfigValidationError { .. }
            | TipError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TipError::CsvError(_)
            | TipError::BatchFormatError { .. }
            | TipError::BatchRowError { .. } => ErrorCategory::Input,
            TipError::IoError(_) | TipError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TipError::BatchRowError { .. } => ErrorSeverity::Medium,
            TipError::ConfigValidationError { .. }
            | TipError::InvalidConfigValueError { .. }
            | TipError::CsvError(_)
            | TipError::BatchFormatError { .. } => ErrorSeverity::High,
            TipError::IoError(_) | TipError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            TipError::IoError(e) => format!("Could not read or write a file: {}", e),
            TipError::CsvError(e) => format!("The batch file is not valid CSV: {}", e),
            TipError::SerializationError(_) => "Could not render JSON output".to_string(),
            TipError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            TipError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for '{}'", value, field)
            }
            TipError::BatchFormatError { message } => {
                format!("The batch file has the wrong layout: {}", message)
            }
            TipError::BatchRowError { row, .. } => format!("Row {} of the batch file is broken", row),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the TOML config file and command line flags",
            ErrorCategory::Input => {
                "Make sure the CSV has a 'bill,people,rating,round_up' header and UTF-8 content"
            }
            ErrorCategory::Output => "Check that the output path exists and is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, TipError>;
