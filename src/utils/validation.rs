use crate::utils::error::{CalendarError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 分隔字元必須是單一可見、非英數字的 ASCII 字元
pub fn validate_separator(field_name: &str, separator: &str) -> Result<char> {
    let mut chars = separator.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(CalendarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: separator.to_string(),
            reason: "Separator must be exactly one character".to_string(),
        });
    };

    if !c.is_ascii() || c.is_ascii_alphanumeric() || c.is_ascii_control() {
        return Err(CalendarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: separator.to_string(),
            reason: "Separator must be a printable ASCII punctuation or space character"
                .to_string(),
        });
    }

    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_separator() {
        assert_eq!(validate_separator("format.separator", "-").unwrap(), '-');
        assert_eq!(validate_separator("format.separator", "/").unwrap(), '/');
        assert_eq!(validate_separator("format.separator", " ").unwrap(), ' ');
        assert!(validate_separator("format.separator", "").is_err());
        assert!(validate_separator("format.separator", "--").is_err());
        assert!(validate_separator("format.separator", "1").is_err());
        assert!(validate_separator("format.separator", "x").is_err());
        assert!(validate_separator("format.separator", "\t").is_err());
        assert!(validate_separator("format.separator", "·").is_err());
    }
}
