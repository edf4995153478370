use std::borrow::Cow;

/// Errors from the strict [`crate::Registry::require`] accessor.
#[featdeck_derive::featdeck_error]
pub enum RegistryError {
    /// The path does not have exactly two non-empty segments.
    #[error("Invalid feature path{}: {message}", format_context(.context))]
    InvalidPath { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown feature group{}: {message}", format_context(.context))]
    UnknownGroup { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown feature{}: {message}", format_context(.context))]
    UnknownFeature { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
