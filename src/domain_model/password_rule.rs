use std::fmt;

/// One entry of the sign-up password policy. Variants are declared in the
/// order they are checked and reported.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PasswordRule {
    Digit,
    Lowercase,
    TwoQs,
    RepeatedDigit,
    LetterF,
    Emoji,
    CurrentYear,
    MaxLength,
    RightArrow,
    Greek,
}

impl PasswordRule {
    pub const ALL: [PasswordRule; 10] = [
        PasswordRule::Digit,
        PasswordRule::Lowercase,
        PasswordRule::TwoQs,
        PasswordRule::RepeatedDigit,
        PasswordRule::LetterF,
        PasswordRule::Emoji,
        PasswordRule::CurrentYear,
        PasswordRule::MaxLength,
        PasswordRule::RightArrow,
        PasswordRule::Greek,
    ];

    pub fn message(self) -> &'static str {
        match self {
            PasswordRule::Digit => "Must include a number",
            PasswordRule::Lowercase => "Must include a lowercase letter",
            PasswordRule::TwoQs => "Must include 'Q' at least twice",
            PasswordRule::RepeatedDigit => "Must use the same number twice in a row",
            PasswordRule::LetterF => "Must include the letter 'F'",
            PasswordRule::Emoji => "Must include an emoji",
            PasswordRule::CurrentYear => "Must include the current year (2024)",
            PasswordRule::MaxLength => "Must be less than 14 characters long",
            PasswordRule::RightArrow => "Must include the right-pointing emoji (→)",
            PasswordRule::Greek => "Must include an ancient Greek numeral",
        }
    }
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
