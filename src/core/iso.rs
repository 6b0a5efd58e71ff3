use crate::domain::ports::DateFormatter;
use crate::utils::error::{CalendarError, Result};

pub const ISO_DATE_LENGTH: usize = 10;
pub const DEFAULT_SEPARATOR: char = '-';

const YEAR_START: usize = 0;
const MONTH_START: usize = 5;
const DAY_START: usize = 8;

/// 依固定位置切出的年/月/日欄位，尚未做任何曆法調整或範圍檢查
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoFields {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl IsoFields {
    /// 年份取第 0-3 字元、月份第 5-6、日期第 8-9。
    /// 分隔字元的位置 (4 與 7) 不檢查內容。
    pub fn parse(input: &str) -> Result<Self> {
        if !input.is_ascii() {
            return Err(malformed(input, "contains non-ASCII characters".to_string()));
        }
        if input.len() != ISO_DATE_LENGTH {
            return Err(malformed(
                input,
                format!(
                    "expected {} characters, found {}",
                    ISO_DATE_LENGTH,
                    input.len()
                ),
            ));
        }

        Ok(Self {
            year: parse_field(input, "year", YEAR_START, 4)?,
            month: parse_field(input, "month", MONTH_START, 2)?,
            day: parse_field(input, "day", DAY_START, 2)?,
        })
    }
}

fn parse_field(input: &str, name: &str, start: usize, width: usize) -> Result<i32> {
    let raw = &input[start..start + width];
    raw.parse::<i32>()
        .map_err(|e| malformed(input, format!("{} field '{}' is not a number: {}", name, raw, e)))
}

fn malformed(input: &str, reason: String) -> CalendarError {
    CalendarError::MalformedInput {
        input: input.to_string(),
        reason,
    }
}

/// 年-月-日順序、補零的格式化器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YmdFormatter {
    pub separator: char,
}

impl YmdFormatter {
    pub fn new(separator: char) -> Self {
        Self { separator }
    }
}

impl Default for YmdFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl DateFormatter for YmdFormatter {
    fn format(&self, year: i32, month: u32, day: u32) -> String {
        let sep = self.separator;
        if year < 0 {
            format!("-{:04}{sep}{:02}{sep}{:02}", year.unsigned_abs(), month, day)
        } else {
            format!("{:04}{sep}{:02}{sep}{:02}", year, month, day)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_offsets() {
        let fields = IsoFields::parse("2024-02-29").unwrap();
        assert_eq!(
            fields,
            IsoFields {
                year: 2024,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn test_separator_positions_are_not_checked() {
        let fields = IsoFields::parse("2024/02.29").unwrap();
        assert_eq!((fields.year, fields.month, fields.day), (2024, 2, 29));
    }

    #[test]
    fn test_parse_keeps_out_of_range_values() {
        let fields = IsoFields::parse("9999-13-40").unwrap();
        assert_eq!((fields.year, fields.month, fields.day), (9999, 13, 40));
    }

    #[test]
    fn test_signed_year_field() {
        let fields = IsoFields::parse("-001-01-01").unwrap();
        assert_eq!(fields.year, -1);
    }

    #[test]
    fn test_wrong_length_is_malformed() {
        for input in ["", "2024-2-29", "2024-02-290", "24-02-29"] {
            let err = IsoFields::parse(input).unwrap_err();
            assert!(
                matches!(err, CalendarError::MalformedInput { .. }),
                "{input}: {err:?}"
            );
        }
    }

    #[test]
    fn test_non_digit_field_is_malformed() {
        assert!(matches!(
            IsoFields::parse("20x4-02-29"),
            Err(CalendarError::MalformedInput { .. })
        ));
        assert!(matches!(
            IsoFields::parse("2024-0a-29"),
            Err(CalendarError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_non_ascii_is_malformed() {
        assert!(matches!(
            IsoFields::parse("2024-é-29"),
            Err(CalendarError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_format_zero_pads() {
        let formatter = YmdFormatter::default();
        assert_eq!(formatter.format(2024, 2, 9), "2024-02-09");
        assert_eq!(formatter.format(5, 1, 1), "0005-01-01");
        assert_eq!(formatter.format(-44, 3, 15), "-0044-03-15");
        assert_eq!(formatter.format(12345, 12, 31), "12345-12-31");
    }

    #[test]
    fn test_format_custom_separator() {
        assert_eq!(YmdFormatter::new('/').format(2020, 1, 2), "2020/01/02");
    }
}
