use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// 所有日期換算成絕對時間時都固定在 UTC 12:00:00，
/// 避免時區或日光節約時間造成跨日。
pub const CANONICAL_HOUR: u32 = 12;

/// 寬鬆換算公曆年/月/日：月份超出 1-12 進位到年份，日數超出當月
/// 天數 (或小於 1) 進位到前後月份。超出 chrono 可表示範圍時取邊界值。
pub fn normalize(year: i32, month: i32, day: i32) -> NaiveDate {
    let total_months = year as i64 * 12 + (month as i64 - 1);
    let normalized_year = total_months.div_euclid(12);
    let normalized_month = total_months.rem_euclid(12) as u32 + 1;

    let first_of_month = i32::try_from(normalized_year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, normalized_month, 1));

    let Some(first_of_month) = first_of_month else {
        return saturate(normalized_year < 0);
    };

    let offset = day as i64 - 1;
    first_of_month
        .checked_add_signed(Duration::days(offset))
        .unwrap_or_else(|| saturate(offset < 0))
}

pub fn pin_to_noon(date: NaiveDate) -> DateTime<Utc> {
    let noon = NaiveTime::from_hms_opt(CANONICAL_HOUR, 0, 0).unwrap_or_default();
    date.and_time(noon).and_utc()
}

fn saturate(below: bool) -> NaiveDate {
    if below {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    }
}
