//! Locale-aware number and relative-time formatting.

use super::Lang;

const MINUTE_MS: u64 = 60_000;

/// Format an integer with `,` thousands separators (`1920` -> `"1,920"`).
pub fn format_number(n: i64) -> String {
    format_with_separator(n, ',')
}

fn format_with_separator(n: i64, sep: char) -> String {
    let negative = n < 0;
    let digits = n.unsigned_abs().to_string();
    let len = digits.len();

    let mut result = String::with_capacity(len + len / 3 + 1);
    if negative {
        result.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(ch);
    }
    result
}

/// Render how long ago something happened, given the elapsed milliseconds.
///
/// Minutes and hours are floored; exactly one day reads as "yesterday".
pub fn format_time_ago(elapsed_ms: u64, lang: Lang) -> String {
    let mins = elapsed_ms / MINUTE_MS;
    if mins < 1 {
        return match lang {
            Lang::Vi => "Vừa xong".to_string(),
            Lang::En => "Just now".to_string(),
        };
    }
    if mins < 60 {
        return match lang {
            Lang::Vi => format!("{mins} phút trước"),
            Lang::En => format!("{mins}m ago"),
        };
    }
    let hrs = mins / 60;
    if hrs < 24 {
        return match lang {
            Lang::Vi => format!("{hrs} giờ trước"),
            Lang::En => format!("{hrs}h ago"),
        };
    }
    let days = hrs / 24;
    match (days, lang) {
        (1, Lang::Vi) => "Hôm qua".to_string(),
        (1, Lang::En) => "Yesterday".to_string(),
        (_, Lang::Vi) => format!("{days} ngày trước"),
        (_, Lang::En) => format!("{days}d ago"),
    }
}
