use chrono::{DateTime, Utc};

/// 波斯曆 (Solar Hijri) 轉換能力。
///
/// 實作必須是純函數：給定波斯曆年/月/日 (月份從 1 開始)，回傳對應的
/// 絕對時間，時間固定在 UTC 正午。超出範圍的月/日應依曆法寬鬆進位。
pub trait PersianConverter: Send + Sync {
    fn persian_to_absolute(&self, year: i32, month: i32, day: i32) -> DateTime<Utc>;
}

/// 將年、月、日三個整數組成字串的格式化器
pub trait DateFormatter: Send + Sync {
    fn format(&self, year: i32, month: u32, day: u32) -> String;
}
