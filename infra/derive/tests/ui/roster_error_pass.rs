use roster_derive::roster_error;
use std::borrow::Cow;

#[roster_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing record{}: {id}", format_context(.context))]
    Missing { id: u64, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err::<(), _>(std::io::Error::other("disk gone"))?;
    Ok(())
}

fn main() {
    let err = read().unwrap_err();
    assert!(matches!(err, DemoError::Io { context: None, .. }));

    let err: DemoError = "boom".into();
    assert_eq!(err.to_string(), "Internal error: boom");

    let err: DemoError = format!("code {}", 7).into();
    assert_eq!(err.to_string(), "Internal error: code 7");
}
