//! Message entry point
//!
//! The IPC host delivers one raw message at a time; a message is fully
//! lexed, parsed, and dispatched before the next one is processed. Parse
//! failures abort the whole message: nothing dispatches and the error
//! carries the diagnostic text. The connection handle stays with the host;
//! no reply is written from here.

use shoji_protocol::{parse_space_command, parse_window_command, ParseError, Tokenizer};
use tracing::debug;

use crate::cvar::ConfigStore;
use crate::dispatch::{dispatch_space, dispatch_window};
use crate::handlers::{SpaceHandler, WindowHandler};
use crate::router::route_config;

/// Everything that can go wrong with one message.
///
/// All variants are recoverable: the message is dropped, the daemon keeps
/// serving.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MessageError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("missing value for config option '{key}'")]
    MissingValue { key: String },

    #[error("'{value}' is not a valid value for config option '{key}'")]
    InvalidValue { key: String, value: String },

    #[error("'{key}' is not a valid config option")]
    UnknownConfigKey { key: String },

    #[error("no match for message type '{0}'")]
    Unmatched(String),
}

/// Process one protocol message against the injected collaborators
pub fn handle_message(
    message: &str,
    windows: &mut dyn WindowHandler,
    spaces: &mut dyn SpaceHandler,
    cvars: &mut dyn ConfigStore,
) -> Result<(), MessageError> {
    let mut tokens = Tokenizer::new(message);
    let message_type = tokens.next_token();

    match message_type.as_str() {
        "config" => route_config(&mut tokens, cvars),
        "window" => {
            let chain = parse_window_command(tokens.remainder())?;
            debug!(commands = chain.len(), "window chain parsed");
            dispatch_window(&chain, windows, cvars);
            Ok(())
        }
        "space" => {
            let chain = parse_space_command(tokens.remainder())?;
            debug!(commands = chain.len(), "space chain parsed");
            dispatch_space(&chain, spaces);
            Ok(())
        }
        other => Err(MessageError::Unmatched(other.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cvar::CvarStore;
    use shoji_protocol::{ConfigKey, GlobalKey, ScopedSuffix};

    /// Window handler double counting invocations per operation
    #[derive(Default)]
    struct CountingWindows {
        focus: Vec<String>,
        swap: Vec<String>,
        other: usize,
    }

    impl WindowHandler for CountingWindows {
        fn focus(&mut self, selector: &str) {
            self.focus.push(selector.into());
        }

        fn swap(&mut self, selector: &str) {
            self.swap.push(selector.into());
        }

        fn use_insertion_point(&mut self, _selector: &str) {
            self.other += 1;
        }

        fn detach_and_reinsert(&mut self, _selector: &str) {
            self.other += 1;
        }

        fn toggle(&mut self, _selector: &str) {
            self.other += 1;
        }

        fn temporary_ratio(&mut self, selector: &str, cvars: &mut dyn ConfigStore) {
            if let Ok(ratio) = selector.parse::<f32>() {
                cvars.update_float(ConfigKey::Global(GlobalKey::BspSplitRatio), ratio);
            }
        }
    }

    #[derive(Default)]
    struct CountingSpaces {
        rotations: Vec<String>,
    }

    impl SpaceHandler for CountingSpaces {
        fn rotate(&mut self, degrees: &str) {
            self.rotations.push(degrees.into());
        }
    }

    struct Fixture {
        windows: CountingWindows,
        spaces: CountingSpaces,
        cvars: CvarStore,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                windows: CountingWindows::default(),
                spaces: CountingSpaces::default(),
                cvars: CvarStore::new(),
            }
        }

        fn handle(&mut self, message: &str) -> Result<(), MessageError> {
            handle_message(
                message,
                &mut self.windows,
                &mut self.spaces,
                &mut self.cvars,
            )
        }
    }

    #[test]
    fn test_window_focus_east() {
        let mut fx = Fixture::new();
        fx.handle("window -f east").unwrap();

        assert_eq!(fx.windows.focus, ["east"]);
        assert!(fx.windows.swap.is_empty());
        assert_eq!(fx.windows.other, 0);
        assert_eq!(fx.cvars.split_ratio(), 0.5);
    }

    #[test]
    fn test_window_temporary_ratio_restored() {
        let mut fx = Fixture::new();
        fx.handle("window -r 0.05").unwrap();

        assert_eq!(fx.cvars.split_ratio(), 0.5);
    }

    #[test]
    fn test_window_invalid_selector_dispatches_nothing() {
        let mut fx = Fixture::new();
        let err = fx.handle("window -f up").unwrap_err();

        assert!(matches!(
            err,
            MessageError::Parse(ParseError::InvalidSelector { flag: 'f', .. })
        ));
        assert!(fx.windows.focus.is_empty());
        assert_eq!(fx.windows.other, 0);
    }

    #[test]
    fn test_window_partial_chain_discarded_on_failure() {
        let mut fx = Fixture::new();
        // First flag is valid; second is not. No handler may run.
        fx.handle("window -f east -s skyward").unwrap_err();

        assert!(fx.windows.focus.is_empty());
        assert!(fx.windows.swap.is_empty());
    }

    #[test]
    fn test_space_rotation() {
        let mut fx = Fixture::new();
        fx.handle("space -r 270").unwrap();

        assert_eq!(fx.spaces.rotations, ["270"]);
    }

    #[test]
    fn test_space_invalid_rotation_rejected() {
        let mut fx = Fixture::new();
        let err = fx.handle("space -r 45").unwrap_err();

        assert!(matches!(
            err,
            MessageError::Parse(ParseError::InvalidSelector { flag: 'r', .. })
        ));
        assert!(fx.spaces.rotations.is_empty());
    }

    #[test]
    fn test_config_messages_reach_the_store() {
        let mut fx = Fixture::new();
        fx.handle("config mouse_follows_focus 1").unwrap();
        fx.handle("config 3_top 20").unwrap();

        assert_eq!(fx.cvars.int_value(GlobalKey::MouseFollowsFocus), 1);
        assert_eq!(fx.cvars.offset(3, ScopedSuffix::Top), 20.0);
        // The scoped update did not leak into the global
        assert_eq!(fx.cvars.float_value(GlobalKey::SpaceOffsetTop), 0.0);
    }

    #[test]
    fn test_config_bogus_key_applies_nothing() {
        let mut fx = Fixture::new();
        let err = fx.handle("config bogus_key 5").unwrap_err();

        assert_eq!(
            err,
            MessageError::UnknownConfigKey {
                key: "bogus_key".into()
            }
        );
    }

    #[test]
    fn test_unmatched_message_type() {
        let mut fx = Fixture::new();
        let err = fx.handle("resize -w 10").unwrap_err();

        assert_eq!(err, MessageError::Unmatched("resize".into()));
        assert_eq!(fx.windows.other, 0);
        assert!(fx.spaces.rotations.is_empty());
    }

    #[test]
    fn test_empty_message_is_unmatched() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.handle("").unwrap_err(),
            MessageError::Unmatched(String::new())
        );
    }

    #[test]
    fn test_messages_are_independent() {
        let mut fx = Fixture::new();
        // A failed message leaves no state behind for the next one
        fx.handle("window -f up").unwrap_err();
        fx.handle("window -f west").unwrap();

        assert_eq!(fx.windows.focus, ["west"]);
    }

    #[test]
    fn test_error_display_matches_diagnostics() {
        assert_eq!(
            MessageError::UnknownConfigKey {
                key: "bogus".into()
            }
            .to_string(),
            "'bogus' is not a valid config option"
        );
        assert_eq!(
            MessageError::Unmatched("blorp".into()).to_string(),
            "no match for message type 'blorp'"
        );
    }
}
