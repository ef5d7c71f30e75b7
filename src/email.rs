//! Email address validation and domain extraction.

use regex::Regex;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// True when `s` is a whole email address. Surrounding whitespace is rejected; trim first.
pub fn is_valid_email(s: &str) -> bool {
    email_regex().is_match(s)
}

/// Lower-cased domain of `s`, or None when `s` is not a valid address.
/// Only the domain is lower-cased; the local part is left as given.
pub fn extract_domain(s: &str) -> Option<String> {
    if !is_valid_email(s) {
        return None;
    }
    match s.split_once('@') {
        Some((_, domain)) if !domain.is_empty() => Some(domain.to_lowercase()),
        _ => None,
    }
}
