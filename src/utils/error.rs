use thiserror::Error;

#[derive(Error, Debug)]
pub enum UsaGovError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {url}: {message}")]
    ApiStatusError {
        status: u16,
        url: String,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required parameter: {field}")]
    MissingParameterError { field: String },

    #[error("Invalid value '{value}' for parameter {field}: {reason}")]
    InvalidParameterError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// CLI 結束時使用的退出碼，失敗一律非零
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl UsaGovError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            UsaGovError::ApiError(_) => ErrorCategory::Network,
            UsaGovError::ApiStatusError { .. } | UsaGovError::SerializationError(_) => {
                ErrorCategory::Api
            }
            UsaGovError::MissingParameterError { .. }
            | UsaGovError::InvalidParameterError { .. } => ErrorCategory::Input,
            UsaGovError::ConfigValidationError { .. }
            | UsaGovError::InvalidConfigValueError { .. }
            | UsaGovError::MissingConfigError { .. } => ErrorCategory::Configuration,
            UsaGovError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            UsaGovError::ApiError(_) => ErrorSeverity::Medium,
            UsaGovError::ApiStatusError { status, .. } if *status == 429 || *status >= 500 => {
                ErrorSeverity::Medium
            }
            UsaGovError::ApiStatusError { .. }
            | UsaGovError::SerializationError(_)
            | UsaGovError::MissingParameterError { .. }
            | UsaGovError::InvalidParameterError { .. } => ErrorSeverity::High,
            UsaGovError::ConfigValidationError { .. }
            | UsaGovError::InvalidConfigValueError { .. }
            | UsaGovError::MissingConfigError { .. } => ErrorSeverity::High,
            UsaGovError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// HTTP 狀態碼（僅限 API 回應錯誤）
    pub fn status(&self) -> Option<u16> {
        match self {
            UsaGovError::ApiStatusError { status, .. } => Some(*status),
            UsaGovError::ApiError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            UsaGovError::ApiError(_) => {
                "Check your network connection and the configured base URL".to_string()
            }
            UsaGovError::ApiStatusError { status, .. } => match status {
                401 | 403 => "Check that the API key is valid (https://api.congress.gov/sign-up/)"
                    .to_string(),
                404 => "Check the congress number, type and identifier of the resource".to_string(),
                429 => "Rate limit reached, wait before sending more requests".to_string(),
                s if *s >= 500 => "The API is unavailable, try again later".to_string(),
                _ => "Check the request parameters".to_string(),
            },
            UsaGovError::SerializationError(_) => {
                "The API returned an unexpected body, check the requested format".to_string()
            }
            UsaGovError::MissingParameterError { field } => {
                format!("Provide a value for {}", field)
            }
            UsaGovError::InvalidParameterError { field, .. } => {
                format!("Fix the value passed for {}", field)
            }
            UsaGovError::ConfigValidationError { field, .. }
            | UsaGovError::InvalidConfigValueError { field, .. }
            | UsaGovError::MissingConfigError { field } => {
                format!("Fix the {} setting in the CLI arguments or config file", field)
            }
            UsaGovError::IoError(_) => "Check file paths and permissions".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            UsaGovError::ApiError(_) => "Could not reach the API".to_string(),
            UsaGovError::ApiStatusError {
                status, message, ..
            } => format!("The API rejected the request ({}): {}", status, message),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UsaGovError>;
