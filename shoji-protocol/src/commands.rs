//! Flag grammars producing validated command chains
//!
//! Two grammars share the parsing machinery: the window grammar
//! (`f`/`s`/`i`/`w` directional, `t` toggle, `r` ratio) and the space
//! grammar (`r` rotation). Each flag's argument is validated against its
//! domain rule before a command is appended; the first invalid flag or
//! selector aborts the whole parse and the partial chain is dropped.

use std::fmt;

use crate::args::build_arguments;
use crate::error::ParseError;
use crate::opts::ShortOpts;

/// Which flag grammar and handler table apply to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Window,
    Space,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Window => f.write_str("window"),
            Domain::Space => f.write_str("space"),
        }
    }
}

/// One validated action extracted from a message
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub flag: char,
    pub arg: String,
}

/// Ordered, validated sequence of actions from one message.
///
/// Created per parsed message, consumed by dispatch, then dropped; never
/// persisted across messages.
pub type CommandChain = Vec<Command>;

/// Option spec for the window grammar
pub const WINDOW_OPTS: &str = "f:s:i:t:w:r:";

/// Option spec for the space grammar
pub const SPACE_OPTS: &str = "r:";

const DIRECTIONS: [&str; 4] = ["west", "east", "north", "south"];
const ROTATIONS: [&str; 3] = ["90", "180", "270"];

/// Parse the flags of a `window` message into a command chain.
///
/// `message` is the text after the `window ` prefix.
pub fn parse_window_command(message: &str) -> Result<CommandChain, ParseError> {
    let args = build_arguments(message)?;
    let mut opts = ShortOpts::new(WINDOW_OPTS, &args);

    let mut chain = CommandChain::new();
    while let Some((flag, arg)) = opts.next_opt()? {
        let valid = match flag {
            // '-f', '-s', '-i' and '-w' accept the same directional selectors
            'f' | 's' | 'i' | 'w' => DIRECTIONS.contains(&arg),
            't' => arg == "float",
            'r' => arg.parse::<f32>().is_ok(),
            other => return Err(ParseError::UnknownFlag(other)),
        };
        if !valid {
            return Err(ParseError::InvalidSelector {
                domain: Domain::Window,
                flag,
                arg: arg.to_owned(),
            });
        }
        chain.push(Command {
            flag,
            arg: arg.to_owned(),
        });
    }

    Ok(chain)
}

/// Parse the flags of a `space` message into a command chain.
///
/// `message` is the text after the `space ` prefix.
pub fn parse_space_command(message: &str) -> Result<CommandChain, ParseError> {
    let args = build_arguments(message)?;
    let mut opts = ShortOpts::new(SPACE_OPTS, &args);

    let mut chain = CommandChain::new();
    while let Some((flag, arg)) = opts.next_opt()? {
        let valid = match flag {
            'r' => ROTATIONS.contains(&arg),
            other => return Err(ParseError::UnknownFlag(other)),
        };
        if !valid {
            return Err(ParseError::InvalidSelector {
                domain: Domain::Space,
                flag,
                arg: arg.to_owned(),
            });
        }
        chain.push(Command {
            flag,
            arg: arg.to_owned(),
        });
    }

    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_focus_east() {
        let chain = parse_window_command("-f east").unwrap();
        assert_eq!(
            chain,
            [Command {
                flag: 'f',
                arg: "east".into()
            }]
        );
    }

    #[test]
    fn test_window_all_directional_flags() {
        for flag in ['f', 's', 'i', 'w'] {
            for dir in DIRECTIONS {
                let chain = parse_window_command(&format!("-{} {}", flag, dir)).unwrap();
                assert_eq!(chain.len(), 1);
                assert_eq!(chain[0].flag, flag);
                assert_eq!(chain[0].arg, dir);
            }
        }
    }

    #[test]
    fn test_window_chain_keeps_message_order() {
        let chain = parse_window_command("-f east -s west -r 0.05").unwrap();
        let flags: Vec<char> = chain.iter().map(|c| c.flag).collect();
        assert_eq!(flags, ['f', 's', 'r']);
        assert_eq!(chain[2].arg, "0.05");
    }

    #[test]
    fn test_window_invalid_direction_fails() {
        let err = parse_window_command("-f up").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidSelector {
                domain: Domain::Window,
                flag: 'f',
                arg: "up".into()
            }
        );
    }

    #[test]
    fn test_window_invalid_selector_discards_earlier_commands() {
        // The first flag is valid; the second is not. Nothing survives.
        let result = parse_window_command("-f east -s upward");
        assert!(result.is_err());
    }

    #[test]
    fn test_window_toggle_accepts_only_float() {
        assert!(parse_window_command("-t float").is_ok());
        assert!(matches!(
            parse_window_command("-t fullscreen"),
            Err(ParseError::InvalidSelector { flag: 't', .. })
        ));
    }

    #[test]
    fn test_window_ratio_accepts_floats() {
        for arg in ["0.05", "-0.1", "1", "0.333"] {
            let chain = parse_window_command(&format!("-r {}", arg)).unwrap();
            assert_eq!(chain[0].arg, arg);
        }
    }

    #[test]
    fn test_window_ratio_rejects_non_numeric() {
        assert!(matches!(
            parse_window_command("-r wide"),
            Err(ParseError::InvalidSelector { flag: 'r', .. })
        ));
    }

    #[test]
    fn test_window_unknown_flag_fails() {
        assert_eq!(
            parse_window_command("-z east"),
            Err(ParseError::UnknownFlag('z'))
        );
    }

    #[test]
    fn test_window_missing_argument_fails() {
        assert_eq!(
            parse_window_command("-f"),
            Err(ParseError::MissingArgument('f'))
        );
    }

    #[test]
    fn test_window_empty_message_yields_empty_chain() {
        assert!(parse_window_command("").unwrap().is_empty());
    }

    #[test]
    fn test_window_leading_non_option_stops_scan() {
        // Short-option convention: scanning ends at the first non-option
        // element, leaving the rest of the message unconsumed.
        assert!(parse_window_command("east -f west").unwrap().is_empty());
    }

    #[test]
    fn test_space_rotations() {
        for deg in ROTATIONS {
            let chain = parse_space_command(&format!("-r {}", deg)).unwrap();
            assert_eq!(
                chain,
                [Command {
                    flag: 'r',
                    arg: deg.into()
                }]
            );
        }
    }

    #[test]
    fn test_space_rejects_other_angles() {
        let err = parse_space_command("-r 45").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidSelector {
                domain: Domain::Space,
                flag: 'r',
                arg: "45".into()
            }
        );
    }

    #[test]
    fn test_space_rejects_window_flags() {
        assert_eq!(
            parse_space_command("-f east"),
            Err(ParseError::UnknownFlag('f'))
        );
    }

    #[test]
    fn test_reparse_produces_equal_independent_chains() {
        let message = "-f east -r 0.05 -t float";
        let first = parse_window_command(message).unwrap();
        let second = parse_window_command(message).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_domain_display() {
        assert_eq!(Domain::Window.to_string(), "window");
        assert_eq!(Domain::Space.to_string(), "space");
    }
}
