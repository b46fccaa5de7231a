//! 날짜 키 정규화.
//!
//! 두 시계열은 서로 다른 소스에서 오기 때문에 같은 날짜가 여러 텍스트 형식으로
//! 표현될 수 있습니다 (`2024-01-02`, `Jan 2, 2024`, `2024-01-02 00:00:00` 등).
//! 키를 비교하거나 정렬하기 전에 반드시 달력 날짜로 해석해야 합니다.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// 날짜만 있는 형식.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// 시각이 포함된 형식 (pandas 타임스탬프 문자열 포함).
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// UTC 오프셋이 포함된 형식.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%d %H:%M:%S%z"];

/// 날짜 키를 달력 날짜로 해석합니다.
///
/// 시각과 오프셋은 버리고 해당 지역의 달력 날짜만 남깁니다.
/// 해석할 수 없으면 `None`을 반환합니다.
///
/// # 예제
///
/// ```
/// use chrono::NaiveDate;
/// use perfboard_core::parse_date_key;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 1, 2);
/// assert_eq!(parse_date_key("2024-01-02"), expected);
/// assert_eq!(parse_date_key("Jan 2, 2024"), expected);
/// assert_eq!(parse_date_key("2024-01-02 00:00:00"), expected);
/// assert_eq!(parse_date_key("yesterday"), None);
/// ```
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(key) {
        return Some(dt.date_naive());
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(key, fmt) {
            return Some(dt.date_naive());
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(key, fmt) {
            return Some(dt.date());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(key, fmt).ok())
}

/// 정규화된 날짜 키 문자열 (`YYYY-MM-DD`).
pub fn format_date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_iso_and_slash_forms() {
        assert_eq!(parse_date_key("2025-03-14"), ymd(2025, 3, 14));
        assert_eq!(parse_date_key("2025/03/14"), ymd(2025, 3, 14));
        assert_eq!(parse_date_key("03/14/2025"), ymd(2025, 3, 14));
    }

    #[test]
    fn test_month_name_forms() {
        assert_eq!(parse_date_key("Mar 14, 2025"), ymd(2025, 3, 14));
        assert_eq!(parse_date_key("March 14, 2025"), ymd(2025, 3, 14));
        assert_eq!(parse_date_key("14 Mar 2025"), ymd(2025, 3, 14));
    }

    #[test]
    fn test_timestamp_forms_keep_calendar_day() {
        assert_eq!(parse_date_key("2025-02-28 00:00:00"), ymd(2025, 2, 28));
        assert_eq!(parse_date_key("2025-02-28T16:00:00"), ymd(2025, 2, 28));
        // 오프셋이 있어도 해당 지역의 날짜를 유지
        assert_eq!(parse_date_key("2025-02-28T23:30:00-05:00"), ymd(2025, 2, 28));
        assert_eq!(parse_date_key("2025-02-28 00:00:00-05:00"), ymd(2025, 2, 28));
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(parse_date_key("  2025-03-14\n"), ymd(2025, 3, 14));
    }

    #[test]
    fn test_unparseable_keys() {
        assert_eq!(parse_date_key(""), None);
        assert_eq!(parse_date_key("   "), None);
        assert_eq!(parse_date_key("2025-13-01"), None);
        assert_eq!(parse_date_key("2025-02-30"), None);
        assert_eq!(parse_date_key("next friday"), None);
    }

    #[test]
    fn test_format_date_key() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(format_date_key(date), "2024-01-02");
    }
}
