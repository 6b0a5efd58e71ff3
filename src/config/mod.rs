#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use serde::{Deserialize, Serialize};

/// 舊資料相容設定，只影響 ISO 字串解析。兩者預設皆停用。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyOptions {
    /// 年份大於 2400 時視為泰國佛曆並減去 543
    pub adjust_thai_legacy_dates: bool,
    /// 年份小於 1900 時視為波斯曆並換算成公曆
    pub adjust_persian_legacy_dates: bool,
}

impl LegacyOptions {
    pub fn new(adjust_thai_legacy_dates: bool, adjust_persian_legacy_dates: bool) -> Self {
        Self {
            adjust_thai_legacy_dates,
            adjust_persian_legacy_dates,
        }
    }
}
