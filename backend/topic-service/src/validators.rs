//! Input validation for board accounts

use once_cell::sync::Lazy;
use regex::Regex;

// Hardcoded pattern, compiled once
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_]{3,20}$")
        .expect("hardcoded username regex is invalid - fix source code")
});

/// 3-20 characters: ASCII letters, digits and underscore
pub fn validate_username(username: &str) -> bool {
    USERNAME_REGEX.is_match(username)
}
