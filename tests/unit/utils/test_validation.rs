use warehouse_client::utils::validation::{InputPattern, validate_input};

#[test]
fn email_pattern_accepts_plain_addresses() {
    assert!(validate_input("user@example.com", InputPattern::Email));
    assert!(validate_input("a.b+c@sub.domain.org", InputPattern::Email));
}

#[test]
fn email_pattern_rejects_malformed_addresses() {
    assert!(!validate_input("user", InputPattern::Email));
    assert!(!validate_input("user@nodot", InputPattern::Email));
    assert!(!validate_input("user name@example.com", InputPattern::Email));
    assert!(!validate_input("", InputPattern::Email));
}

#[test]
fn phone_pattern_accepts_national_and_international_forms() {
    assert!(validate_input("600112233", InputPattern::Phone));
    assert!(validate_input("+34 600 11 22 33", InputPattern::Phone));
    assert!(validate_input("91-123-45-67", InputPattern::Phone));
}

#[test]
fn phone_pattern_requires_at_least_nine_characters() {
    assert!(!validate_input("12345678", InputPattern::Phone));
    assert!(!validate_input("", InputPattern::Phone));
    assert!(!validate_input("phone123456", InputPattern::Phone));
}

#[test]
fn number_pattern_is_digits_only() {
    assert!(validate_input("0", InputPattern::Number));
    assert!(validate_input("123456", InputPattern::Number));
    assert!(!validate_input("12.5", InputPattern::Number));
    assert!(!validate_input("-3", InputPattern::Number));
    assert!(!validate_input("", InputPattern::Number));
}
