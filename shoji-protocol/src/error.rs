//! Parse errors for the message grammar

use crate::commands::Domain;

/// Errors produced while turning a message into a command chain.
///
/// Any of these aborts the parse: the partially built chain is dropped and
/// nothing is dispatched for the offending message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unrecognized option '-{0}'")]
    UnknownFlag(char),

    #[error("option '-{0}' requires an argument")]
    MissingArgument(char),

    #[error("message exceeds {max} arguments")]
    TooManyArguments { max: usize },

    #[error("invalid selector '{arg}' for {domain} flag '{flag}'")]
    InvalidSelector {
        domain: Domain,
        flag: char,
        arg: String,
    },
}
