use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, DemoError> {
    let text = std::fs::read_to_string("missing.txt").context("Reading fixture")?;
    if text.is_empty() {
        return Err("empty fixture".into());
    }
    Ok(text)
}

fn main() {
    let err = read().context("Loading demo").unwrap_err();
    assert!(err.to_string().contains("(Loading demo)"));
}
