//! Argument-vector builder
//!
//! Materializes the token stream of one message into an owned, indexed
//! argument list compatible with short-option parsing. Slot 0 holds a fixed
//! placeholder because the option-scanning convention reserves argument 0
//! for a program name; real arguments start at slot 1.

use crate::error::ParseError;
use crate::lexer::Tokenizer;

/// Hard limit on tokens accepted from a single message.
///
/// Messages beyond the limit are rejected with
/// [`ParseError::TooManyArguments`] instead of being truncated.
pub const MAX_MESSAGE_ARGS: usize = 64;

/// Placeholder occupying argv slot 0; never read by the option scanner
pub const ARG0_PLACEHOLDER: &str = "shoji";

/// Build the argument vector for one message.
///
/// The vector is owned by the caller and dropped when parsing completes,
/// win or fail.
pub fn build_arguments(message: &str) -> Result<Vec<String>, ParseError> {
    let mut args = vec![ARG0_PLACEHOLDER.to_string()];

    let mut tokens = Tokenizer::new(message);
    while !tokens.is_exhausted() {
        if args.len() > MAX_MESSAGE_ARGS {
            return Err(ParseError::TooManyArguments {
                max: MAX_MESSAGE_ARGS,
            });
        }
        args.push(tokens.next_token().as_str().to_owned());
    }

    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_zero_is_placeholder() {
        let args = build_arguments("-f east").unwrap();
        assert_eq!(args[0], ARG0_PLACEHOLDER);
        assert_eq!(&args[1..], ["-f", "east"]);
    }

    #[test]
    fn test_empty_message_builds_placeholder_only() {
        let args = build_arguments("").unwrap();
        assert_eq!(args, [ARG0_PLACEHOLDER]);
    }

    #[test]
    fn test_arguments_keep_message_order() {
        let args = build_arguments("-f east -s west -r 0.1").unwrap();
        assert_eq!(&args[1..], ["-f", "east", "-s", "west", "-r", "0.1"]);
    }

    #[test]
    fn test_long_message_accepted_up_to_limit() {
        let message = vec!["x"; MAX_MESSAGE_ARGS].join(" ");
        let args = build_arguments(&message).unwrap();
        assert_eq!(args.len(), MAX_MESSAGE_ARGS + 1);
    }

    #[test]
    fn test_over_limit_rejected_not_truncated() {
        let message = vec!["x"; MAX_MESSAGE_ARGS + 1].join(" ");
        let err = build_arguments(&message).unwrap_err();
        assert_eq!(
            err,
            ParseError::TooManyArguments {
                max: MAX_MESSAGE_ARGS
            }
        );
    }
}
