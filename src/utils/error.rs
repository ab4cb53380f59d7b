use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown product id: {id}")]
    UnknownProduct { id: u32 },

    #[error("Invalid command '{input}': {reason}")]
    InvalidCommand { input: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StoreError::IoError(_) | StoreError::SerializationError(_) => ErrorCategory::Io,
            StoreError::ConfigParseError(_) | StoreError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            StoreError::UnknownProduct { .. } | StoreError::InvalidCommand { .. } => {
                ErrorCategory::Input
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 互動模式下只提示；一次性指令則以非零碼結束
            StoreError::UnknownProduct { .. } | StoreError::InvalidCommand { .. } => {
                ErrorSeverity::Medium
            }
            StoreError::SerializationError(_)
            | StoreError::ConfigParseError(_)
            | StoreError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            StoreError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 依錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            StoreError::IoError(_) => {
                "Check that the file exists and the terminal is readable/writable".to_string()
            }
            StoreError::SerializationError(_) => "Retry the command without --json".to_string(),
            StoreError::ConfigParseError(_) => {
                "Make sure the config file is valid TOML".to_string()
            }
            StoreError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the config file", field)
            }
            StoreError::UnknownProduct { .. } => {
                "Run 'show' or 'list' to see the available product ids".to_string()
            }
            StoreError::InvalidCommand { .. } => {
                "Type 'commands' to see what the shell understands".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StoreError::IoError(e) => format!("Could not read or write: {}", e),
            StoreError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            StoreError::ConfigParseError(e) => format!("The config file is not valid: {}", e),
            StoreError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Config value {} = '{}' is not allowed: {}", field, value, reason),
            StoreError::UnknownProduct { id } => format!("There is no product #{}", id),
            StoreError::InvalidCommand { input, reason } => {
                format!("Cannot understand '{}': {}", input, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
