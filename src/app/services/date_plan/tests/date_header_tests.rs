use chrono::NaiveDate;

use crate::app::services::date_plan::date_header::{clean_label, is_date_header, resolve};

#[test]
fn test_resolve_two_digit_year() {
    let (date, label) = resolve("13 Aug 25 (Wed)", 1999);
    assert_eq!(date, NaiveDate::from_ymd_opt(2025, 8, 13));
    assert_eq!(label, "13 Aug 25 (Wed)");
}

#[test]
fn test_resolve_four_digit_year() {
    let (date, _) = resolve("01 AUG 2025", 1999);
    assert_eq!(date, NaiveDate::from_ymd_opt(2025, 8, 1));
}

#[test]
fn test_resolve_missing_year_uses_fallback() {
    let (date, _) = resolve("2 September", 2026);
    assert_eq!(date, NaiveDate::from_ymd_opt(2026, 9, 2));
}

#[test]
fn test_resolve_ordinal_suffix() {
    let (date, _) = resolve("3rd Mar 2025", 1999);
    assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 3));
}

#[test]
fn test_resolve_impossible_date_keeps_label() {
    let (date, label) = resolve("45 Aug 25", 2025);
    assert!(date.is_none());
    assert_eq!(label, "45 Aug 25");
}

#[test]
fn test_resolve_unknown_month_word() {
    let (date, _) = resolve("13 Zzz 25", 2025);
    assert!(date.is_none());
}

#[test]
fn test_clean_label_strips_emoji() {
    assert_eq!(clean_label("\u{1F4C5} 13 Aug 25"), "13 Aug 25");
}

#[test]
fn test_is_date_header() {
    assert!(is_date_header("13 Aug 25 (Wed)"));
    assert!(is_date_header("2 September"));
    assert!(!is_date_header("F3 1130 - 2200 GH"));
    assert!(!is_date_header("13 Zzz 25"));
    assert!(!is_date_header("Notes: see ops"));
}
