pub mod checklist;
pub mod config;
pub mod constants;
pub mod feedback;
pub mod role;
pub mod steps;
pub mod theme;
pub mod validation;
