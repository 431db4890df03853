//! Short-option scanner over an argument vector
//!
//! A minimal getopt-style scanner. The spec string names single-character
//! flags, each followed by `:` when it requires an argument (the window
//! grammar is `"f:s:i:t:w:r:"`). Scanning starts at argv slot 1, accepts
//! both separate (`-f east`) and attached (`-feast`) argument forms, honors
//! `--` as end of options, and stops at the first element that is not an
//! option. Unknown flags and missing arguments are hard errors.

use crate::error::ParseError;

/// Scanner state for one argument vector
#[derive(Debug)]
pub struct ShortOpts<'a> {
    args: &'a [String],
    flags: Vec<(char, bool)>,
    index: usize,
}

impl<'a> ShortOpts<'a> {
    /// Create a scanner from a spec string and an argument vector built by
    /// [`crate::args::build_arguments`]
    pub fn new(spec: &str, args: &'a [String]) -> Self {
        let mut flags = Vec::new();
        let mut chars = spec.chars().peekable();
        while let Some(flag) = chars.next() {
            let takes_arg = chars.peek() == Some(&':');
            if takes_arg {
                chars.next();
            }
            flags.push((flag, takes_arg));
        }
        Self {
            args,
            flags,
            index: 1,
        }
    }

    fn lookup(&self, flag: char) -> Option<bool> {
        self.flags
            .iter()
            .find(|(known, _)| *known == flag)
            .map(|(_, takes_arg)| *takes_arg)
    }

    /// Scan the next option. `Ok(None)` means end of options.
    pub fn next_opt(&mut self) -> Result<Option<(char, &'a str)>, ParseError> {
        let arg = match self.args.get(self.index) {
            Some(arg) => arg,
            None => return Ok(None),
        };

        if arg == "--" {
            self.index += 1;
            return Ok(None);
        }

        let body = match arg.strip_prefix('-') {
            Some(body) if !body.is_empty() => body,
            // A bare "-" or a non-option element ends the scan
            _ => return Ok(None),
        };
        self.index += 1;

        let mut body_chars = body.chars();
        let flag = match body_chars.next() {
            Some(flag) => flag,
            None => return Ok(None),
        };
        let attached = body_chars.as_str();

        let takes_arg = match self.lookup(flag) {
            Some(takes_arg) => takes_arg,
            None => return Err(ParseError::UnknownFlag(flag)),
        };

        if !takes_arg {
            return Ok(Some((flag, "")));
        }

        if !attached.is_empty() {
            return Ok(Some((flag, attached)));
        }

        match self.args.get(self.index) {
            Some(value) => {
                self.index += 1;
                Ok(Some((flag, value.as_str())))
            }
            None => Err(ParseError::MissingArgument(flag)),
        }
    }
}
