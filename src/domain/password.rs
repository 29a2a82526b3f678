//! Password policy applied at registration submission time.

/// Advisory message shown when a candidate password fails the policy.
pub const POLICY_MESSAGE: &str = "Password must be 8-12 characters long and include uppercase letters, lowercase letters, numbers, and special characters.";

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 12;

/// Symbols the policy both requires (at least one) and permits.
const SYMBOLS: [char; 7] = ['@', '$', '!', '%', '*', '?', '&'];

/// Returns whether a candidate password satisfies the registration policy.
///
/// The whole password alphabet is restricted to ASCII letters, digits and
/// the fixed symbol set; any other character fails the match outright.
pub fn validate(password: &str) -> bool {
    let length = password.chars().count();
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return false;
    }

    let mut has_lowercase = false;
    let mut has_uppercase = false;
    let mut has_digit = false;
    let mut has_symbol = false;

    for c in password.chars() {
        if c.is_ascii_lowercase() {
            has_lowercase = true;
        } else if c.is_ascii_uppercase() {
            has_uppercase = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if SYMBOLS.contains(&c) {
            has_symbol = true;
        } else {
            return false;
        }
    }

    has_lowercase && has_uppercase && has_digit && has_symbol
}
