use serde::{Deserialize, Serialize};

use crate::constants::{
    CHECKLIST_HIDE_DELAY_MS, HIDDEN_CLASS, INVALID_CLASS, MIN_PASSWORD_LENGTH, SHOW_CLASS,
    STEP_ACTIVE_CLASS, VALID_CLASS,
};

/// Class names the signup behavior toggles. Any field missing from the page
/// config keeps its default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub valid: String,
    pub invalid: String,
    pub show: String,
    pub hidden: String,
    pub step_active: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            valid: VALID_CLASS.to_string(),
            invalid: INVALID_CLASS.to_string(),
            show: SHOW_CLASS.to_string(),
            hidden: HIDDEN_CLASS.to_string(),
            step_active: STEP_ACTIVE_CLASS.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupConfig {
    pub checklist_hide_delay_ms: u32,
    pub min_password_length: usize,
    pub classes: ClassNames,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            checklist_hide_delay_ms: CHECKLIST_HIDE_DELAY_MS,
            min_password_length: MIN_PASSWORD_LENGTH,
            classes: ClassNames::default(),
        }
    }
}

impl SignupConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Blank input means "no config on the page"; malformed input falls back
    /// to defaults with a warning.
    pub fn from_json_or_default(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed signup config: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SignupConfig::default();
        assert_eq!(config.checklist_hide_delay_ms, 50);
        assert_eq!(config.min_password_length, 8);
        assert_eq!(config.classes.step_active, "step-active");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = SignupConfig::from_json(r#"{"checklist_hide_delay_ms": 0, "classes": {"hidden": "is-hidden"}}"#)
            .unwrap();
        assert_eq!(config.checklist_hide_delay_ms, 0);
        assert_eq!(config.min_password_length, 8);
        assert_eq!(config.classes.hidden, "is-hidden");
        assert_eq!(config.classes.show, "show");
    }

    #[test]
    fn test_round_trip() {
        let mut config = SignupConfig::default();
        config.min_password_length = 12;
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SignupConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_blank_and_malformed_fall_back() {
        assert_eq!(SignupConfig::from_json_or_default("   "), SignupConfig::default());
        assert_eq!(SignupConfig::from_json_or_default("{not json"), SignupConfig::default());
    }
}
