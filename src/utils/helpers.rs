use rand::Rng;
use regex::Regex;
use std::sync::OnceLock;

/// Generate a 6-digit verification code
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    let code: u32 = rng.random_range(100000..=999999);
    code.to_string()
}

/// Code expiration time in minutes
pub const CODE_EXPIRATION_MINUTES: i64 = 10;

/// Permissive shape check, not RFC validation: a local part, an "@", and a
/// dotted domain, with no whitespace or stray "@" anywhere.
pub fn looks_like_email(email: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    });
    pattern.is_match(email)
}
