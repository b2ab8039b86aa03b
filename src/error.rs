use alloc::boxed::Box;
use thiserror::Error;

/// Errors surfaced by the command surface (§6.1/§7).
///
/// All [`Commands`](crate::commands::Commands) methods return
/// `Result<_, SetError>`. On `Err`, no mutation, [`EventSink`
/// ](crate::events::EventSink) notification, or [`PropagationSink`
/// ](crate::events::PropagationSink) propagation has occurred for that call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetError {
    /// `name` resolves to a value that is not a set.
    #[error("WRONGTYPE key `{name}` holds a value that is not a set")]
    WrongKind { name: Box<str> },

    /// A numeric argument was out of the allowed range for its command.
    #[error("value out of range: {what}")]
    Range { what: &'static str },

    /// The command itself was malformed; reserved for callers that build a
    /// request parser on top of this crate.
    #[error("syntax error: {what}")]
    Syntax { what: &'static str },
}

impl SetError {
    pub(crate) fn wrong_kind(name: &str) -> Self {
        Self::WrongKind { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_key() {
        let err = SetError::wrong_kind("mykey");
        assert!(err.to_string().contains("mykey"));
    }
}
