//! Month calendar arithmetic for the pickup scheduler.

use serde::{Deserialize, Serialize};

use crate::localization::{Lang, LocalizedText};

pub const MONTH_NAMES: [LocalizedText; 12] = [
    LocalizedText::new("Tháng 1", "January"),
    LocalizedText::new("Tháng 2", "February"),
    LocalizedText::new("Tháng 3", "March"),
    LocalizedText::new("Tháng 4", "April"),
    LocalizedText::new("Tháng 5", "May"),
    LocalizedText::new("Tháng 6", "June"),
    LocalizedText::new("Tháng 7", "July"),
    LocalizedText::new("Tháng 8", "August"),
    LocalizedText::new("Tháng 9", "September"),
    LocalizedText::new("Tháng 10", "October"),
    LocalizedText::new("Tháng 11", "November"),
    LocalizedText::new("Tháng 12", "December"),
];

/// Column headers, Sunday first.
pub const DAY_HEADERS: [LocalizedText; 7] = [
    LocalizedText::new("CN", "Su"),
    LocalizedText::new("T2", "Mo"),
    LocalizedText::new("T3", "Tu"),
    LocalizedText::new("T4", "We"),
    LocalizedText::new("T5", "Th"),
    LocalizedText::new("T6", "Fr"),
    LocalizedText::new("T7", "Sa"),
];

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in `month` (1-12). Out-of-range months have 0 days.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Weekday of the given date, Sunday = 0 (Sakamoto's method).
pub fn weekday(year: i32, month: u32, day: u32) -> u32 {
    const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let m = month.clamp(1, 12) as usize;
    let y = if m < 3 { year - 1 } else { year };
    let d = day as i32;
    (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + OFFSETS[m - 1] + d)
        .rem_euclid(7) as u32
}

pub fn first_weekday(year: i32, month: u32) -> u32 {
    weekday(year, month, 1)
}

/// `YYYY-MM-DD`, zero padded.
pub fn date_key(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Civil (UTC) date for a unix timestamp in milliseconds.
pub fn civil_date_from_millis(millis: u64) -> (i32, u32, u32) {
    let days = (millis / 86_400_000) as i64;
    // Days-to-civil over 400-year eras.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = (yoe + era * 400 + i64::from(month <= 2)) as i32;
    (year, month, day)
}

/// The month currently shown by the calendar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub year: i32,
    /// 1-12.
    pub month: u32,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn containing(millis: u64) -> Self {
        let (year, month, _) = civil_date_from_millis(millis);
        Self::new(year, month)
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn days(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Leading blank cells before day 1.
    pub fn first_weekday(self) -> u32 {
        first_weekday(self.year, self.month)
    }

    pub fn key(self, day: u32) -> String {
        date_key(self.year, self.month, day)
    }

    pub fn title(self, lang: Lang) -> String {
        let name = MONTH_NAMES[(self.month - 1) as usize].get(lang);
        format!("{} {}", name, self.year)
    }
}
