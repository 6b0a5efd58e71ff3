use crate::config::LegacyOptions;
use crate::core::gregorian::{normalize, pin_to_noon};
use crate::core::iso::{IsoFields, YmdFormatter};
use crate::core::persian::ArithmeticPersian;
use crate::domain::ports::{DateFormatter, PersianConverter};
use crate::utils::error::{CalendarError, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// 泰國佛曆與公曆的年份差
pub const THAI_YEAR_OFFSET: i32 = 543;

/// 大於此年份且啟用泰國舊資料調整時，視為佛曆年份
pub const THAI_LEGACY_THRESHOLD: i32 = 2400;

/// 小於此年份且啟用波斯舊資料調整時，視為波斯曆年份
pub const PERSIAN_LEGACY_THRESHOLD: i32 = 1900;

/// 一個日曆日，內部一律以公曆 (proleptic Gregorian) 年/月/日保存。
///
/// 三個欄位照原樣保存，不檢查範圍；讀取、比較、格式化時才寬鬆換算
/// (例如 4 月 31 日等同 5 月 1 日)。相等與排序以換算後固定在 UTC 正午的
/// 絕對時間為準。
#[derive(Debug, Clone, Copy)]
pub struct CalendarDate {
    year: i32,
    month: i32,
    day: i32,
}

impl CalendarDate {
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// 使用內建的波斯曆換算解析 ISO 字串
    pub fn from_iso_string(input: &str, options: &LegacyOptions) -> Result<Self> {
        Self::from_iso_string_with(input, options, &ArithmeticPersian)
    }

    /// 解析固定寬度的 `YYYY-MM-DD`，依序套用波斯曆與泰國佛曆舊資料調整，
    /// 再檢查年/月/日範圍。
    pub fn from_iso_string_with(
        input: &str,
        options: &LegacyOptions,
        converter: &dyn PersianConverter,
    ) -> Result<Self> {
        let IsoFields {
            mut year,
            month,
            day,
        } = IsoFields::parse(input)?;

        if options.adjust_persian_legacy_dates && year < PERSIAN_LEGACY_THRESHOLD {
            tracing::debug!("Treating '{}' as a legacy Persian date", input);
            return Ok(Self::from_persian_with(converter, year, month, day));
        }

        if options.adjust_thai_legacy_dates && year > THAI_LEGACY_THRESHOLD {
            tracing::debug!(
                "Treating '{}' as a legacy Thai date, year {} -> {}",
                input,
                year,
                year - THAI_YEAR_OFFSET
            );
            year -= THAI_YEAR_OFFSET;
        }

        if year < 0 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }

        Ok(Self::from_gregorian(year, month, day))
    }

    /// 轉成 UTC 當天的日期；早於 Unix epoch 的時間一律視為 epoch
    pub fn from_absolute_time(time: DateTime<Utc>) -> Self {
        let time = if time < DateTime::<Utc>::UNIX_EPOCH {
            tracing::debug!("Clamping pre-epoch time {} to the epoch", time);
            DateTime::<Utc>::UNIX_EPOCH
        } else {
            time
        };
        Self::from(time.date_naive())
    }

    pub fn copy(other: &CalendarDate) -> Self {
        Self::from_gregorian(other.year, other.month, other.day)
    }

    pub fn from_persian(year: i32, month: i32, day: i32) -> Self {
        Self::from_persian_with(&ArithmeticPersian, year, month, day)
    }

    /// 波斯曆換算刻意不經過 epoch 限制 (舊版會把 1970 年以前的結果
    /// 一律變成 1970-01-01)，因此 1970 年以前的日期照樣保留
    pub fn from_persian_with(
        converter: &dyn PersianConverter,
        year: i32,
        month: i32,
        day: i32,
    ) -> Self {
        let instant = converter.persian_to_absolute(year, month, day);
        Self::from(instant.date_naive())
    }

    pub fn today() -> Self {
        Self::from_absolute_time(Utc::now())
    }

    pub fn year(&self) -> i32 {
        self.to_naive_date().year()
    }

    /// 1-12
    pub fn month(&self) -> u32 {
        self.to_naive_date().month()
    }

    pub fn day(&self) -> u32 {
        self.to_naive_date().day()
    }

    /// 加減天數後重建年/月/日，跨月、跨年與閏年由 chrono 處理
    pub fn add_days(&mut self, days: i64) {
        let current = self.to_naive_date();
        let shifted = Duration::try_days(days)
            .and_then(|delta| current.checked_add_signed(delta))
            .unwrap_or(if days < 0 {
                NaiveDate::MIN
            } else {
                NaiveDate::MAX
            });
        *self = Self::from(shifted);
    }

    pub fn before(&self, other: &CalendarDate) -> bool {
        self.to_absolute_time() < other.to_absolute_time()
    }

    pub fn after(&self, other: &CalendarDate) -> bool {
        self.to_absolute_time() > other.to_absolute_time()
    }

    pub fn to_absolute_time(&self) -> DateTime<Utc> {
        pin_to_noon(self.to_naive_date())
    }

    pub fn to_naive_date(&self) -> NaiveDate {
        normalize(self.year, self.month, self.day)
    }

    pub fn to_iso_string(&self) -> String {
        self.to_iso_string_with(&YmdFormatter::default())
    }

    pub fn to_iso_string_with(&self, formatter: &dyn DateFormatter) -> String {
        let date = self.to_naive_date();
        formatter.format(date.year(), date.month(), date.day())
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        // chrono guarantees month 1-12 and day 1-31
        Self::from_gregorian(date.year(), date.month() as i32, date.day() as i32)
    }
}

impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        self.to_absolute_time() == other.to_absolute_time()
    }
}

impl Eq for CalendarDate {}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_absolute_time().cmp(&other.to_absolute_time())
    }
}

impl Hash for CalendarDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_naive_date().hash(state);
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_iso_string(s, &LegacyOptions::default())
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
