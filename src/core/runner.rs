use crate::config::cli::{CliConfig, Command};
use crate::config::toml_config::CalendarConfig;
use crate::domain::model::CalendarDate;
use crate::utils::error::{CalendarError, Result};

/// 日期輸入錯誤的結束碼
pub const EXIT_INPUT_ERROR: i32 = 1;
/// 設定檔或系統錯誤的結束碼
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// 合併設定後執行子命令，回傳要輸出到 stdout 的每一行
pub fn execute(cli: &CliConfig) -> Result<Vec<String>> {
    let config = cli.resolve()?;
    run(&cli.command, &config)
}

pub fn run(command: &Command, config: &CalendarConfig) -> Result<Vec<String>> {
    let options = config.legacy_options();
    let formatter = config.formatter()?;

    let lines = match command {
        Command::Parse { dates } => {
            let mut lines = Vec::with_capacity(dates.len());
            for raw in dates {
                let date = CalendarDate::from_iso_string(raw, &options)?;
                tracing::debug!("{} -> {}", raw, date);
                lines.push(date.to_iso_string_with(&formatter));
            }
            lines
        }
        Command::Persian { year, month, day } => {
            let date = CalendarDate::from_persian(*year, *month, *day);
            vec![date.to_iso_string_with(&formatter)]
        }
        Command::AddDays { date, days } => {
            let mut parsed = CalendarDate::from_iso_string(date, &options)?;
            parsed.add_days(*days);
            vec![parsed.to_iso_string_with(&formatter)]
        }
        Command::Timestamp { date } => {
            let instant = CalendarDate::from_iso_string(date, &options)?.to_absolute_time();
            vec![format!("{}\t{}", instant.to_rfc3339(), instant.timestamp())]
        }
    };

    Ok(lines)
}

pub fn exit_code(error: &CalendarError) -> i32 {
    if error.is_input_error() {
        EXIT_INPUT_ERROR
    } else {
        EXIT_CONFIG_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn execute_args(args: &[&str]) -> Result<Vec<String>> {
        let mut argv = vec!["multi-calendar"];
        argv.extend_from_slice(args);
        execute(&CliConfig::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_parse_prints_each_date() {
        let lines = execute_args(&["parse", "2020-01-01", "2024-04-31"]).unwrap();
        assert_eq!(lines, vec!["2020-01-01", "2024-05-01"]);
    }

    #[test]
    fn test_parse_with_legacy_flags() {
        let lines = execute_args(&["--thai", "--persian", "parse", "2543-06-15", "1348-10-11"])
            .unwrap();
        assert_eq!(lines, vec!["2000-06-15", "1970-01-01"]);
    }

    #[test]
    fn test_persian_subcommand() {
        let lines = execute_args(&["persian", "1384", "5", "20"]).unwrap();
        assert_eq!(lines, vec!["2005-08-11"]);
    }

    #[test]
    fn test_add_days_subcommand() {
        assert_eq!(
            execute_args(&["add-days", "2024-02-28", "1"]).unwrap(),
            vec!["2024-02-29"]
        );
        assert_eq!(
            execute_args(&["add-days", "2024-03-01", "-1"]).unwrap(),
            vec!["2024-02-29"]
        );
    }

    #[test]
    fn test_timestamp_prints_rfc3339_and_unix_seconds() {
        let lines = execute_args(&["timestamp", "2020-01-01"]).unwrap();
        assert_eq!(lines, vec!["2020-01-01T12:00:00+00:00\t1577880000"]);
    }

    #[test]
    fn test_separator_flag_overrides_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[format]\nseparator = \".\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap();

        let from_file = execute_args(&["--config", path, "parse", "2020-01-02"]).unwrap();
        assert_eq!(from_file, vec!["2020.01.02"]);

        let overridden =
            execute_args(&["--config", path, "--separator", "/", "parse", "2020-01-02"]).unwrap();
        assert_eq!(overridden, vec!["2020/01/02"]);
    }

    #[test]
    fn test_invalid_date_exits_with_input_code() {
        let err = execute_args(&["parse", "9999-13-40"]).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidDate { .. }));
        assert_eq!(exit_code(&err), EXIT_INPUT_ERROR);

        let err = execute_args(&["timestamp", "2020/1/1"]).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_INPUT_ERROR);
    }

    #[test]
    fn test_bad_separator_exits_with_config_code() {
        let err = execute_args(&["--separator", "ab", "parse", "2020-01-01"]).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidConfigValueError { .. }));
        assert_eq!(exit_code(&err), EXIT_CONFIG_ERROR);
    }

    #[test]
    fn test_missing_config_file_exits_with_config_code() {
        let err = execute_args(&["--config", "/definitely/not/here.toml", "parse", "2020-01-01"])
            .unwrap_err();
        assert_eq!(exit_code(&err), EXIT_CONFIG_ERROR);
    }
}
