pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const PASSWORD_SYMBOLS: &str = r#"!@#$%^&*(),.?":{}|<>"#;
pub const RECIPIENT_ROLE: &str = "Recipient";

pub const CHECKLIST_HIDE_DELAY_MS: u32 = 50;

pub const VALID_CLASS: &str = "valid";
pub const INVALID_CLASS: &str = "invalid";
pub const SHOW_CLASS: &str = "show";
pub const HIDDEN_CLASS: &str = "hidden";
pub const STEP_ACTIVE_CLASS: &str = "step-active";
pub const DARK_MODE_CLASS: &str = "dark-mode";

pub const PASSWORD_TOO_SHORT_ERROR: &str = "Password is too short";
pub const PASSWORD_UPPERCASE_ERROR: &str = "Password must contain an uppercase letter";
pub const PASSWORD_SYMBOL_ERROR: &str = "Password must contain a symbol";
pub const PASSWORD_MISMATCH_ERROR: &str = "Passwords do not match";

pub const ADDED_ITEM_PREFIX: &str = "You added: ";
