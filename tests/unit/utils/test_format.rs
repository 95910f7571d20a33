use chrono::{TimeZone, Utc};
use warehouse_client::utils::format::{format_currency, format_date};

#[test]
fn format_date_uses_day_month_year() {
    let date = Utc.with_ymd_and_hms(2025, 3, 7, 14, 30, 0).unwrap();
    assert_eq!(format_date(&date), "07/03/2025");
}

#[test]
fn format_currency_groups_thousands_spanish_style() {
    assert_eq!(format_currency(1234.56), "1.234,56 €");
    assert_eq!(format_currency(1234567.89), "1.234.567,89 €");
}

#[test]
fn format_currency_small_amounts_have_no_grouping() {
    assert_eq!(format_currency(0.0), "0,00 €");
    assert_eq!(format_currency(7.5), "7,50 €");
    assert_eq!(format_currency(999.99), "999,99 €");
}

#[test]
fn format_currency_rounds_to_two_decimals() {
    assert_eq!(format_currency(10.006), "10,01 €");
    assert_eq!(format_currency(2.999), "3,00 €");
}

#[test]
fn format_currency_handles_negative_amounts() {
    assert_eq!(format_currency(-1234.56), "-1.234,56 €");
    assert_eq!(format_currency(-0.5), "-0,50 €");
}
