//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Ten-digit subscriber number, no country code or separators
static SUBSCRIBER_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").unwrap());

/// Check if a phone number is a valid ten-digit subscriber number
pub fn is_valid_subscriber_number(phone: &str) -> bool {
    SUBSCRIBER_NUMBER_REGEX.is_match(phone)
}

/// Mask a phone number for display in logs (e.g., 987****3210)
///
/// Strips non-digit characters first; handlers log the raw request value
/// before validation, so the input may be arbitrary.
pub fn mask_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 7 {
        format!("{}****{}", &digits[0..3], &digits[digits.len() - 4..])
    } else {
        "****".to_string()
    }
}
