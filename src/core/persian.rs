use crate::domain::ports::PersianConverter;
use chrono::{DateTime, NaiveDate, Utc};

/// 波斯曆元年 1 月 1 日的固定日數 (公曆 0622-03-22)
const PERSIAN_EPOCH: i64 = 226_896;

/// 2820 年週期的總天數
const DAYS_PER_CYCLE: i64 = 1_029_983;

const CYCLE_YEARS: i64 = 2820;

/// 以 2820 年週期算術法換算波斯曆 (Solar Hijri)。
///
/// 固定日數以公曆 0001-01-01 為第 1 天，與 chrono 的
/// `NaiveDate::from_num_days_from_ce_opt` 相同。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArithmeticPersian;

impl ArithmeticPersian {
    /// 波斯曆閏年判斷 (Esfand 有 30 天)
    pub fn is_leap_year(year: i32) -> bool {
        let cycle_year = Self::cycle_year(year as i64);
        ((cycle_year + 38) * 31).rem_euclid(128) < 31
    }

    pub fn days_in_month(year: i32, month: u32) -> u32 {
        match month {
            1..=6 => 31,
            7..=11 => 30,
            12 if Self::is_leap_year(year) => 30,
            12 => 29,
            _ => 0,
        }
    }

    /// 波斯曆年/月/日轉為固定日數。月份超出 1-12 會進位到年份，
    /// 日數超出當月長度會直接往後累加。
    pub fn fixed_from_persian(year: i32, month: i32, day: i32) -> i64 {
        let total_months = year as i64 * 12 + (month as i64 - 1);
        let year = total_months.div_euclid(12);
        let month = total_months.rem_euclid(12) + 1;

        let shifted = Self::shifted_year(year);
        let cycle_year = shifted.rem_euclid(CYCLE_YEARS) + 474;

        let month_offset = if month <= 7 {
            31 * (month - 1)
        } else {
            30 * (month - 1) + 6
        };

        PERSIAN_EPOCH - 1
            + DAYS_PER_CYCLE * shifted.div_euclid(CYCLE_YEARS)
            + 365 * (cycle_year - 1)
            + (31 * cycle_year - 5).div_euclid(128)
            + month_offset
            + day as i64
    }

    // Years are counted from 474 AP; there is no year zero.
    fn shifted_year(year: i64) -> i64 {
        if year > 0 {
            year - 474
        } else {
            year - 473
        }
    }

    fn cycle_year(year: i64) -> i64 {
        Self::shifted_year(year).rem_euclid(CYCLE_YEARS) + 474
    }
}

impl PersianConverter for ArithmeticPersian {
    fn persian_to_absolute(&self, year: i32, month: i32, day: i32) -> DateTime<Utc> {
        if (1..=12).contains(&month) && day > Self::days_in_month(year, month as u32) as i32 {
            tracing::debug!(
                "Persian day {} exceeds {} days in {}-{}, carrying over",
                day,
                Self::days_in_month(year, month as u32),
                year,
                month
            );
        }

        let fixed = Self::fixed_from_persian(year, month, day);
        let date = i32::try_from(fixed)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .unwrap_or(if fixed < 1 {
                NaiveDate::MIN
            } else {
                NaiveDate::MAX
            });

        tracing::debug!(
            "Persian {}-{}-{} converted to Gregorian {}",
            year,
            month,
            day,
            date
        );

        crate::core::gregorian::pin_to_noon(date)
    }
}
