pub mod add_item;
pub mod home;
pub mod signup;
