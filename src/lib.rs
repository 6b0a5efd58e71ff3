pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use config::{toml_config::CalendarConfig, LegacyOptions};
pub use crate::core::{iso::YmdFormatter, persian::ArithmeticPersian};
pub use domain::model::{CalendarDate, THAI_YEAR_OFFSET};
pub use domain::ports::{DateFormatter, PersianConverter};
pub use utils::error::{CalendarError, Result};
