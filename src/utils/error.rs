use thiserror::Error;

#[derive(Error, Debug)]
pub enum CityError {
    #[error("Malformed city data at line {line} ({content:?}): {reason}")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Failed to read city data from {source_name}: {source}")]
    SourceRead {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl CityError {
    pub(crate) fn parse(line: usize, content: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } | Self::ValidationError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Parse { line, reason, .. } => {
                format!("The city data file is malformed at line {}: {}", line, reason)
            }
            Self::SourceRead { source_name, .. } => {
                format!("Could not read the city data from {}", source_name)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Parse { .. } => {
                "Each line must look like '<name>, <ST>, <population>' with a two-letter state code"
            }
            Self::SourceRead { .. } | Self::IoError(_) => {
                "Check that the data file exists and is readable, or omit --data to use the bundled list"
            }
            Self::ConfigError { .. } => "Check the TOML configuration file syntax",
            Self::InvalidConfigValueError { .. } | Self::ValidationError { .. } => {
                "Check the --data path and --state values; run with --list-states to see state choices"
            }
            Self::CsvError(_) | Self::SerializationError(_) => "Try the default text output format",
        }
    }

    /// Process exit code for the binary: configuration problems are 2, everything else 1.
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            2
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, CityError>;
