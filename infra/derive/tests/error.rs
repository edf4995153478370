use featdeck_derive::featdeck_error;
use std::borrow::Cow;

#[featdeck_error]
pub enum SampleError {
    #[error("Parse failure{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Missing entry{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal sample error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, SampleError> {
    Ok(raw.parse::<u32>()?)
}

#[test]
fn question_mark_converts_source_errors() {
    let err = parse("nope").unwrap_err();
    assert!(matches!(err, SampleError::Parse { context: None, .. }));
}

#[test]
fn context_is_attached_to_foreign_results() {
    let err = "x".parse::<u32>().context("reading port").unwrap_err();
    assert_eq!(err.to_string(), "Parse failure (reading port): invalid digit found in string");
}

#[test]
fn context_overrides_on_own_results() {
    let res: Result<(), SampleError> =
        Err(SampleError::Missing { message: "auth.nope".into(), context: None });
    let err = res.context("lookup").unwrap_err();
    assert_eq!(err.to_string(), "Missing entry (lookup): auth.nope");
}

#[test]
fn strings_become_internal_errors() {
    let from_static: SampleError = "boom".into();
    let from_owned: SampleError = String::from("bang").into();

    assert_eq!(from_static.to_string(), "Internal sample error: boom");
    assert!(matches!(from_owned, SampleError::Internal { ref message, .. } if message == "bang"));
}
