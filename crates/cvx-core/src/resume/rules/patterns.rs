//! Common regex patterns for resume field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Phone: at least 10 characters of digits with optional leading +,
    // interior spaces, hyphens and parentheses. No plausibility check
    // on digit count or country code.
    pub static ref PHONE: Regex = Regex::new(
        r"\+?\d[\d\s\-()]{8,}\d"
    ).unwrap();

    // Email: local@domain with at least one dot in the domain part.
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+"
    ).unwrap();
}
