//! shoji-protocol: Shared message-grammar definitions for the shoji daemon
//!
//! This crate defines the textual command protocol spoken over the daemon's
//! Unix socket and the parsing pipeline that turns one raw message into
//! validated, typed commands. It performs no I/O; the daemon owns the socket
//! and the client owns the connection.
//!
//! ## Message Grammar
//!
//! Messages are single lines of space-delimited ASCII:
//!
//! ```text
//! config <key> <value>        # typed update to the configuration store
//! window -<flag> <arg> ...    # window actions, short-option style
//! space -<flag> <arg> ...     # space actions, short-option style
//! ```
//!
//! ## Supported Flags
//!
//! | Domain | Flag | Argument | Action |
//! |--------|------|----------|--------|
//! | window | `f`  | west/east/north/south | focus |
//! | window | `s`  | west/east/north/south | swap |
//! | window | `i`  | west/east/north/south | set insertion point |
//! | window | `w`  | west/east/north/south | detach and reinsert |
//! | window | `t`  | float | toggle float |
//! | window | `r`  | floating-point number | temporary split ratio |
//! | space  | `r`  | 90/180/270 | rotate window tree |
//!
//! ## Processing Pipeline
//!
//! ```text
//! raw message → Tokenizer → build_arguments() → ShortOpts
//!                    │                              │
//!                    │                              └─→ CommandChain → daemon dispatch
//!                    │
//!                    └─→ ConfigKey::parse() → typed config update
//! ```
//!
//! Parsing is all-or-nothing per message: any unrecognized flag, missing
//! argument, or invalid selector discards the partially built chain and
//! reports failure, so a half-valid message never dispatches anything.

pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod lexer;
pub mod opts;

// Re-export main types at crate root
pub use args::{build_arguments, ARG0_PLACEHOLDER, MAX_MESSAGE_ARGS};
pub use commands::{
    parse_space_command, parse_window_command, Command, CommandChain, Domain, SPACE_OPTS,
    WINDOW_OPTS,
};
pub use config::{ConfigKey, GlobalKey, ScopedSuffix, SpaceMode, SplitMode, ValueKind};
pub use error::ParseError;
pub use lexer::{Token, Tokenizer};
pub use opts::ShortOpts;
