mod password_checklist;
mod role_select;
mod signup_form;

pub use password_checklist::{PasswordChecklist, StrengthMeter};
pub use role_select::RoleSelect;
pub use signup_form::SignupForm;
