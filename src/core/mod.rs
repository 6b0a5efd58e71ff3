pub mod gregorian;
pub mod iso;
pub mod persian;
#[cfg(feature = "cli")]
pub mod runner;

pub use crate::domain::model::CalendarDate;
pub use crate::domain::ports::{DateFormatter, PersianConverter};
pub use crate::utils::error::Result;
