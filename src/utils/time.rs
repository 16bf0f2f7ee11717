//! Calendar helpers for windowed aggregation

use chrono::{Datelike, Days, NaiveDate, Utc};

/// Today's date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Fiscal quarter (1-4) of a month, `ceil(month / 3)`
pub fn quarter_of_month(month: u32) -> u32 {
    (month + 2) / 3
}

/// Fiscal quarter (1-4) containing a date
pub fn quarter_of(date: NaiveDate) -> u32 {
    quarter_of_month(date.month())
}

/// Display label for a quarter bucket
pub fn quarter_label(quarter: u32, year: i32) -> String {
    format!("Q{} {}", quarter, year)
}

/// First day of the month containing `date`
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// January 1 of the year containing `date`
pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

/// The `count` quarters ending with the one containing `date`, oldest first
pub fn trailing_quarters(date: NaiveDate, count: usize) -> Vec<(u32, i32)> {
    let mut quarter = quarter_of(date);
    let mut year = date.year();
    let mut quarters = Vec::with_capacity(count);

    for _ in 0..count {
        quarters.push((quarter, year));
        if quarter == 1 {
            quarter = 4;
            year -= 1;
        } else {
            quarter -= 1;
        }
    }

    quarters.reverse();
    quarters
}

/// Date `days` days before `date`, saturating at the calendar minimum
pub fn days_before(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}
