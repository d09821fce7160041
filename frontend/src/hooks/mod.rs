pub mod checklist_visibility;
pub mod form_state;
pub mod step_sequence;
pub mod validation;

pub use checklist_visibility::*;
pub use form_state::*;
pub use step_sequence::*;
pub use validation::*;
