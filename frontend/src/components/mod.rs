pub mod add_item_form;
pub mod signup;
pub mod theme_toggle;

pub use add_item_form::AddItemForm;
pub use signup::*;
pub use theme_toggle::ThemeToggle;
