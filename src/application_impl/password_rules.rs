use crate::domain_model::PasswordRule;
use once_cell::sync::Lazy;
use regex::Regex;

/// Passwords must stay strictly below this many characters.
pub const MAX_PASSWORD_CHARS: usize = 14;

// `\d` is Unicode-aware: any character of category Nd.
static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());
static LOWERCASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").unwrap());
// BMP symbol blocks plus everything past U+1F000.
static EMOJI_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{203C}-\x{3299}\x{1F000}-\x{10FFFF}]").unwrap());
static GREEK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{0391}-\x{03A9}\x{03B1}-\x{03C9}]").unwrap());

/// Checks `password` against every rule and returns the ones it breaks, in
/// policy order. An empty result means the password is acceptable.
pub fn validate_password(password: &str) -> Vec<PasswordRule> {
    PasswordRule::ALL
        .into_iter()
        .filter(|rule| !is_satisfied(*rule, password))
        .collect()
}

pub fn is_satisfied(rule: PasswordRule, password: &str) -> bool {
    match rule {
        PasswordRule::Digit => DIGIT_REGEX.is_match(password),
        PasswordRule::Lowercase => LOWERCASE_REGEX.is_match(password),
        PasswordRule::TwoQs => password.matches('Q').count() >= 2,
        PasswordRule::RepeatedDigit => has_repeated_digit(password),
        PasswordRule::LetterF => password.contains('F'),
        PasswordRule::Emoji => EMOJI_REGEX.is_match(password),
        PasswordRule::CurrentYear => password.contains("2024"),
        PasswordRule::MaxLength => password.chars().count() < MAX_PASSWORD_CHARS,
        PasswordRule::RightArrow => password.contains('→'),
        PasswordRule::Greek => GREEK_REGEX.is_match(password),
    }
}

// `regex` has no backreferences, so neighbours are compared by hand.
fn has_repeated_digit(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(2)
        .any(|pair| pair[0] == pair[1] && is_decimal_digit(pair[0]))
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DIGIT_REGEX.is_match(c.encode_utf8(&mut buf))
}
