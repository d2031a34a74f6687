use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum MapsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid premier configuration: {message}")]
    InvalidPremierConfiguration { message: String },

    #[error("No URL path configured for service '{service}'")]
    UnknownService { service: String },

    #[error("Invalid response: {message}")]
    InvalidResponse {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Invalid response: no results (status {status})")]
    ZeroResults { status: String },
}

pub type Result<T> = std::result::Result<T, MapsError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Response,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MapsError {
    pub fn invalid_response(message: impl Into<String>) -> Self {
        MapsError::InvalidResponse {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a transport or parse failure, keeping it as the error source.
    pub fn unknown_response_error<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        let err = err.into();
        MapsError::InvalidResponse {
            message: format!("unknown error: {}", err),
            source: Some(err),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            MapsError::IoError(_) => ErrorCategory::Io,
            MapsError::ConfigError { .. }
            | MapsError::MissingConfigError { .. }
            | MapsError::InvalidConfigValueError { .. }
            | MapsError::InvalidPremierConfiguration { .. }
            | MapsError::UnknownService { .. } => ErrorCategory::Configuration,
            MapsError::InvalidResponse { .. } | MapsError::ZeroResults { .. } => {
                ErrorCategory::Response
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MapsError::ZeroResults { .. } => ErrorSeverity::Low,
            // transport and parse failures carry a source and may clear up on their own
            MapsError::InvalidResponse { source: Some(_), .. } => ErrorSeverity::Medium,
            MapsError::InvalidResponse { source: None, .. } => ErrorSeverity::High,
            MapsError::IoError(_) => ErrorSeverity::High,
            _ => ErrorSeverity::Critical,
        }
    }

    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    /// True for every response failure, including the zero-results case.
    pub fn is_invalid_response(&self) -> bool {
        self.category() == ErrorCategory::Response
    }

    pub fn is_zero_results(&self) -> bool {
        matches!(self, MapsError::ZeroResults { .. })
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MapsError::IoError(_) => "Check that the configuration file exists and is readable",
            MapsError::ConfigError { .. }
            | MapsError::MissingConfigError { .. }
            | MapsError::InvalidConfigValueError { .. } => {
                "Review the configuration file and environment variables"
            }
            MapsError::InvalidPremierConfiguration { .. } => {
                "Set premier_key to the base64url private key issued with the client id"
            }
            MapsError::UnknownService { .. } => {
                "Add a path for the service under [service_paths]"
            }
            MapsError::InvalidResponse { source: Some(_), .. } => {
                "Check network connectivity and the endpoint URL, then retry"
            }
            MapsError::InvalidResponse { source: None, .. } => {
                "Check the API key or client credentials and the request parameters"
            }
            MapsError::ZeroResults { .. } => "Broaden the query; the service found nothing",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MapsError::ZeroResults { .. } => "No results found".to_string(),
            MapsError::InvalidResponse { message, .. } => {
                format!("Maps service request failed: {}", message)
            }
            other => other.to_string(),
        }
    }
}
