use thiserror::Error;

/// Why a DOM-bound handler could not do its work. Handlers log these and
/// become no-ops; nothing is surfaced to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("element `{0}` is not on the page")]
    MissingElement(&'static str),
    #[error("element `{0}` has an unexpected type")]
    WrongElementType(&'static str),
    #[error("selector `{0}` could not be evaluated")]
    Query(&'static str),
}
