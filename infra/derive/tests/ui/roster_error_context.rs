use roster_derive::roster_error;
use std::borrow::Cow;

#[roster_error]
pub enum LookupError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Missing record{}: {id}", format_context(.context))]
    Missing { id: u64, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u64, LookupError> {
    raw.parse::<u64>().context("parsing identifier")
}

fn find(id: u64) -> Result<(), LookupError> {
    Err(LookupError::Missing { id, context: None })
}

fn main() {
    let err = parse("abc").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (parsing identifier): "));

    let err = find(9).context("users table").unwrap_err();
    assert_eq!(err.to_string(), "Missing record (users table): 9");
}
