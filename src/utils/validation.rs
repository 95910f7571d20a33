/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/11/25
******************************************************************************/

//! Input pattern validation for form-level fields

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern");
    static ref PHONE_PATTERN: Regex = Regex::new(r"^\+?[\d\s-]{9,}$").expect("phone pattern");
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^\d+$").expect("number pattern");
}

/// Input kinds with an associated validation pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPattern {
    /// Email address
    Email,
    /// Phone number, optional leading `+`, at least nine characters
    Phone,
    /// Unsigned decimal number
    Number,
}

/// Validates a value against the pattern for its input kind
///
/// # Arguments
/// * `value` - The raw input string
/// * `pattern` - Which pattern to apply
///
/// # Returns
/// `true` if the value matches the pattern
pub fn validate_input(value: &str, pattern: InputPattern) -> bool {
    match pattern {
        InputPattern::Email => EMAIL_PATTERN.is_match(value),
        InputPattern::Phone => PHONE_PATTERN.is_match(value),
        InputPattern::Number => NUMBER_PATTERN.is_match(value),
    }
}
