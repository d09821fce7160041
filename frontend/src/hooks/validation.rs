use shared::checklist::Checklist;
use shared::validation::PasswordRules;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PasswordValidationState {
    pub rules: PasswordRules,
    pub checklist: Checklist,
}

impl PasswordValidationState {
    pub fn is_valid(&self) -> bool {
        self.rules.is_valid()
    }
}

/// Recomputes the whole checklist from the current password and confirmation
/// on every emit.
#[hook]
pub fn use_password_validation(
    min_length: usize,
) -> (UseStateHandle<PasswordValidationState>, Callback<(String, String)>) {
    let validation = use_state_eq(PasswordValidationState::default);

    let validate = {
        let validation = validation.clone();
        Callback::from(move |(password, confirmation): (String, String)| {
            let rules = PasswordRules::evaluate_with_min_length(&password, &confirmation, min_length);
            validation.set(PasswordValidationState {
                rules,
                checklist: Checklist::from_rules(&rules),
            });
        })
    };

    (validation, validate)
}
