use crate::config::toml_config::CalendarConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "multi-calendar")]
#[command(about = "Normalize Gregorian, Thai and Persian dates to ISO-8601")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Treat years above 2400 as Thai Buddhist Era
    #[arg(long, global = true)]
    pub thai: bool,

    /// Treat years below 1900 as Persian (Solar Hijri)
    #[arg(long, global = true)]
    pub persian: bool,

    /// Output separator, overrides `[format] separator`
    #[arg(long, global = true)]
    pub separator: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Parse YYYY-MM-DD strings and print the Gregorian date
    Parse {
        #[arg(required = true)]
        dates: Vec<String>,
    },
    /// Convert a Persian year/month/day to Gregorian
    Persian {
        #[arg(allow_negative_numbers = true)]
        year: i32,
        #[arg(allow_negative_numbers = true)]
        month: i32,
        #[arg(allow_negative_numbers = true)]
        day: i32,
    },
    /// Add (or subtract) days from a date
    AddDays {
        date: String,
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },
    /// Print the canonical noon-UTC instant of a date
    Timestamp { date: String },
}

impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<CalendarConfig> {
        let mut config = match &self.config {
            Some(path) => CalendarConfig::from_file(path)?,
            None => CalendarConfig::default(),
        };

        if self.thai {
            config.legacy.adjust_thai_legacy_dates = true;
        }
        if self.persian {
            config.legacy.adjust_persian_legacy_dates = true;
        }
        if let Some(separator) = &self.separator {
            config.format.separator = separator.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
