use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::checklist::ChecklistItem;
use crate::constants::{
    MIN_PASSWORD_LENGTH, PASSWORD_MISMATCH_ERROR, PASSWORD_SYMBOLS, PASSWORD_SYMBOL_ERROR, PASSWORD_TOO_SHORT_ERROR,
    PASSWORD_UPPERCASE_ERROR,
};

static SYMBOL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[{}]", regex::escape(PASSWORD_SYMBOLS))).expect("escaped symbol class is a valid regex")
});

/// Outcome of the four password rules for one pair of field values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordRules {
    pub has_min_length: bool,
    pub has_uppercase: bool,
    pub has_symbol: bool,
    pub matches_confirmation: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordStrength {
    None,
    Weak,
    Medium,
    Strong,
}

impl PasswordRules {
    pub fn evaluate(password: &str, confirmation: &str) -> Self {
        Self::evaluate_with_min_length(password, confirmation, MIN_PASSWORD_LENGTH)
    }

    pub fn evaluate_with_min_length(password: &str, confirmation: &str, min_length: usize) -> Self {
        Self {
            has_min_length: has_min_length(password, min_length),
            has_uppercase: has_uppercase(password),
            has_symbol: has_symbol(password),
            matches_confirmation: passwords_match(password, confirmation),
        }
    }

    pub fn passes(&self, item: ChecklistItem) -> bool {
        match item {
            ChecklistItem::Length => self.has_min_length,
            ChecklistItem::Uppercase => self.has_uppercase,
            ChecklistItem::Symbol => self.has_symbol,
            ChecklistItem::Match => self.matches_confirmation,
        }
    }

    /// True only when every rule holds; gates the submit control.
    pub fn is_valid(&self) -> bool {
        self.has_min_length && self.has_uppercase && self.has_symbol && self.matches_confirmation
    }

    /// Strength of the password alone; the confirmation does not count.
    pub fn strength(&self) -> PasswordStrength {
        let met = [self.has_min_length, self.has_uppercase, self.has_symbol]
            .iter()
            .filter(|&&x| x)
            .count();

        match met {
            0 => PasswordStrength::None,
            1 => PasswordStrength::Weak,
            2 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }
}

/// Length in UTF-16 code units, the unit a browser reports for an input value.
pub fn has_min_length(password: &str, min_length: usize) -> bool {
    password.encode_utf16().count() >= min_length
}

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_symbol(password: &str) -> bool {
    SYMBOL_REGEX.is_match(password)
}

pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    !password.is_empty() && !confirmation.is_empty() && password == confirmation
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Reports the first failing strength rule.
pub fn validate_password(password: &str, min_length: usize) -> Result<(), ValidationError> {
    if !has_min_length(password, min_length) {
        return Err(rule_error("password_too_short", PASSWORD_TOO_SHORT_ERROR));
    }
    if !has_uppercase(password) {
        return Err(rule_error("password_missing_uppercase", PASSWORD_UPPERCASE_ERROR));
    }
    if !has_symbol(password) {
        return Err(rule_error("password_missing_symbol", PASSWORD_SYMBOL_ERROR));
    }
    Ok(())
}

pub fn validate_signup(
    password: &str,
    confirmation: &str,
    min_length: usize,
) -> Result<(), ValidationError> {
    validate_password(password, min_length)?;
    if !passwords_match(password, confirmation) {
        return Err(rule_error("password_mismatch", PASSWORD_MISMATCH_ERROR));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_threshold() {
        assert!(!has_min_length("", 8));
        assert!(!has_min_length("1234567", 8));
        assert!(has_min_length("12345678", 8));
        assert!(has_min_length("123456789", 8));
    }

    #[test]
    fn test_length_counts_utf16_code_units() {
        // each emoji is a surrogate pair
        assert!(has_min_length("😀😀😀😀", 8));
        assert!(!has_min_length("😀😀😀", 8));
        // 7 code units, 14 bytes
        assert!(!has_min_length("ééééééé", 8));
        assert!(has_min_length("éééééééé", 8));
    }

    #[test]
    fn test_uppercase_is_ascii_only() {
        assert!(has_uppercase("abcDef"));
        assert!(has_uppercase("Z"));
        assert!(!has_uppercase("abcdef123!"));
        assert!(!has_uppercase("Éclair"));
        assert!(!has_uppercase("Ñandú"));
    }

    #[test]
    fn test_every_listed_symbol_counts() {
        for symbol in crate::constants::PASSWORD_SYMBOLS.chars() {
            assert!(has_symbol(&format!("abc{symbol}def")), "{symbol} should count");
        }
    }

    #[test]
    fn test_unlisted_punctuation_does_not_count() {
        for other in ["-", "_", "+", "=", "/", "\\", "~", "`", "'", ";", "[", "]", " "] {
            assert!(!has_symbol(&format!("Abcdefgh{other}")), "{other} should not count");
        }
    }

    #[test]
    fn test_match_requires_both_non_empty() {
        assert!(!passwords_match("", ""));
        assert!(!passwords_match("abc", ""));
        assert!(!passwords_match("", "abc"));
        assert!(!passwords_match("abc", "abd"));
        assert!(passwords_match("abc", "abc"));
    }

    #[test]
    fn test_strong_matching_pair_is_valid() {
        let rules = PasswordRules::evaluate("Ab1!5678", "Ab1!5678");
        assert!(rules.has_min_length);
        assert!(rules.has_uppercase);
        assert!(rules.has_symbol);
        assert!(rules.matches_confirmation);
        assert!(rules.is_valid());
        assert_eq!(rules.strength(), PasswordStrength::Strong);
    }

    #[test]
    fn test_short_password_is_invalid() {
        let rules = PasswordRules::evaluate("short", "short");
        assert!(!rules.has_min_length);
        assert!(!rules.has_uppercase);
        assert!(!rules.has_symbol);
        assert!(rules.matches_confirmation);
        assert!(!rules.is_valid());
    }

    #[test]
    fn test_empty_confirmation_blocks_strong_password() {
        let rules = PasswordRules::evaluate("LongEnough1!", "");
        assert!(rules.has_min_length && rules.has_uppercase && rules.has_symbol);
        assert!(!rules.matches_confirmation);
        assert!(!rules.is_valid());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let first = PasswordRules::evaluate("Mixed!case", "Mixed!case");
        let second = PasswordRules::evaluate("Mixed!case", "Mixed!case");
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_min_length() {
        assert!(PasswordRules::evaluate_with_min_length("Ab!", "Ab!", 3).is_valid());
        assert!(!PasswordRules::evaluate_with_min_length("Ab!", "Ab!", 4).is_valid());
    }

    #[test]
    fn test_strength_levels() {
        assert_eq!(PasswordRules::evaluate("", "").strength(), PasswordStrength::None);
        assert_eq!(PasswordRules::evaluate("abc", "").strength(), PasswordStrength::None);
        assert_eq!(PasswordRules::evaluate("abcdefgh", "").strength(), PasswordStrength::Weak);
        assert_eq!(PasswordRules::evaluate("Abcdefgh", "").strength(), PasswordStrength::Medium);
        assert_eq!(PasswordRules::evaluate("Abcdefg!", "").strength(), PasswordStrength::Strong);
    }

    #[test]
    fn test_validate_signup_error_codes() {
        assert!(validate_signup("Ab1!5678", "Ab1!5678", MIN_PASSWORD_LENGTH).is_ok());
        assert_eq!(validate_signup("Ab!", "Ab!", MIN_PASSWORD_LENGTH).unwrap_err().code, "password_too_short");
        assert_eq!(validate_signup("abcdefg!", "abcdefg!", MIN_PASSWORD_LENGTH).unwrap_err().code, "password_missing_uppercase");
        assert_eq!(validate_signup("Abcdefgh", "Abcdefgh", MIN_PASSWORD_LENGTH).unwrap_err().code, "password_missing_symbol");
        assert_eq!(validate_signup("Abcdefg!", "Abcdefg?", MIN_PASSWORD_LENGTH).unwrap_err().code, "password_mismatch");
    }

    #[test]
    fn test_validate_signup_honours_min_length() {
        assert!(validate_signup("Ab!", "Ab!", 3).is_ok());
        assert_eq!(validate_signup("Ab!defgh", "Ab!defgh", 12).unwrap_err().code, "password_too_short");
    }

    #[test]
    fn test_validation_error_carries_message() {
        let error = validate_password("abc", MIN_PASSWORD_LENGTH).unwrap_err();
        assert_eq!(error.message.as_deref(), Some(PASSWORD_TOO_SHORT_ERROR));
    }
}
