use crate::config::LegacyOptions;
use crate::core::iso::{YmdFormatter, DEFAULT_SEPARATOR};
use crate::utils::error::{CalendarError, Result};
use crate::utils::validation::{validate_separator, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub legacy: LegacyOptions,
    #[serde(default)]
    pub format: FormatConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl CalendarConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading calendar configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(CalendarError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CalendarError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_separator("format.separator", &self.format.separator)?;
        Ok(())
    }

    pub fn legacy_options(&self) -> LegacyOptions {
        self.legacy
    }

    /// 依設定的分隔字元建立格式化器；分隔字元無效時回傳錯誤
    pub fn formatter(&self) -> Result<YmdFormatter> {
        let separator = validate_separator("format.separator", &self.format.separator)?;
        Ok(YmdFormatter::new(separator))
    }
}

impl Validate for CalendarConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
