use serde::{Deserialize, Serialize};

use crate::config::ClassNames;
use crate::constants::RECIPIENT_ROLE;

pub const ROLE_OPTIONS: [&str; 3] = [RECIPIENT_ROLE, "Donor", "Volunteer"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Recipient,
    #[default]
    Other,
}

impl Role {
    /// Exact, case-sensitive comparison against the select value.
    pub fn from_value(value: &str) -> Self {
        if value == RECIPIENT_ROLE {
            Self::Recipient
        } else {
            Self::Other
        }
    }

    pub fn shows_recipient_categories(&self) -> bool {
        matches!(self, Self::Recipient)
    }

    /// Hidden class for the recipient categories section, if it should carry one.
    pub fn categories_class<'a>(&self, classes: &'a ClassNames) -> Option<&'a str> {
        (!self.shows_recipient_categories()).then_some(classes.hidden.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_recipient_shows_categories() {
        assert!(Role::from_value("Recipient").shows_recipient_categories());
        for value in ["", "Donor", "Volunteer", "recipient", "Recipient "] {
            assert!(!Role::from_value(value).shows_recipient_categories(), "{value:?}");
        }
    }

    #[test]
    fn test_switching_roles_toggles_hidden_class() {
        let classes = ClassNames::default();
        assert_eq!(Role::from_value("Other").categories_class(&classes), Some("hidden"));
        assert_eq!(Role::from_value("Recipient").categories_class(&classes), None);
        assert_eq!(Role::from_value("Other").categories_class(&classes), Some("hidden"));
    }

    #[test]
    fn test_default_role_hides_categories() {
        assert!(!Role::default().shows_recipient_categories());
    }
}
