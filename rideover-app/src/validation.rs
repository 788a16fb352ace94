use rideover_core::CoreError;

/// Character set the signup form counts as special.
const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Minimum strength score accepted at registration.
pub const MIN_STRENGTH_SCORE: u8 = 3;

/// Per-rule password strength indicators, mirrored by the signup form's
/// strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    pub has_min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special_char: bool,
}

impl PasswordStrength {
    pub fn evaluate(password: &str) -> Self {
        Self {
            has_min_length: password.chars().count() >= 8,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special_char: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }

    /// Count of satisfied rules, 0 through 5.
    pub fn score(&self) -> u8 {
        [
            self.has_min_length,
            self.has_uppercase,
            self.has_lowercase,
            self.has_digit,
            self.has_special_char,
        ]
        .iter()
        .filter(|rule| **rule)
        .count() as u8
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please use a stronger password")]
    WeakPassword,
}

impl From<AuthError> for CoreError {
    fn from(err: AuthError) -> Self {
        CoreError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_counts_each_satisfied_rule() {
        assert_eq!(PasswordStrength::evaluate("").score(), 0);
        assert_eq!(PasswordStrength::evaluate("abcdefgh").score(), 2);
        assert_eq!(PasswordStrength::evaluate("Abcdefgh").score(), 3);
        assert_eq!(PasswordStrength::evaluate("Abcdefg1").score(), 4);
        assert_eq!(PasswordStrength::evaluate("Abcdef1!").score(), 5);
    }

    #[test]
    fn score_is_monotonic_in_rule_satisfaction() {
        // Each password satisfies a strict superset of the previous one's
        // rules; the score must never decrease along the chain.
        let chain = ["", "a", "aA", "aA1", "aA1!", "aaaaA1!x"];
        let scores: Vec<u8> = chain
            .iter()
            .map(|p| PasswordStrength::evaluate(p).score())
            .collect();
        for pair in scores.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert!(scores.iter().all(|score| *score <= 5));
    }

    #[test]
    fn special_characters_match_the_form_meter() {
        assert!(PasswordStrength::evaluate("pass word!").has_special_char);
        assert!(PasswordStrength::evaluate("pa=ss").has_special_char);
        assert!(!PasswordStrength::evaluate("password1").has_special_char);
    }
}
