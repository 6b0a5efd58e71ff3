use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("invalid date: {year}-{month}-{day}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    #[error("Malformed date string '{input}': {reason}")]
    MalformedInput { input: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalendarError {
    /// 是否為日期輸入本身的問題 (相對於設定/系統錯誤)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalendarError::InvalidDate { .. } | CalendarError::MalformedInput { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalendarError::InvalidDate { year, month, day } => format!(
                "The date {}-{}-{} is out of range (month must be 1-12, day 1-31, year not negative)",
                year, month, day
            ),
            CalendarError::MalformedInput { input, .. } => {
                format!("'{}' is not a YYYY-MM-DD date", input)
            }
            CalendarError::IoError(e) => format!("Could not read file: {}", e),
            CalendarError::ConfigParseError { .. } => {
                "The configuration file is not valid TOML".to_string()
            }
            CalendarError::InvalidConfigValueError { field, .. } => {
                format!("Configuration value '{}' is invalid", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalendarError::InvalidDate { .. } => {
                "Check the month and day fields, or enable the matching legacy adjustment (--thai / --persian)"
            }
            CalendarError::MalformedInput { .. } => {
                "Use exactly 10 characters: 4-digit year, separator, 2-digit month, separator, 2-digit day"
            }
            CalendarError::IoError(_) => "Make sure the file exists and is readable",
            CalendarError::ConfigParseError { .. } => {
                "Fix the TOML syntax; see [legacy] and [format] tables"
            }
            CalendarError::InvalidConfigValueError { .. } => {
                "Correct the highlighted value in the configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
