//! Config-key router
//!
//! Maps `config <key> <value>` messages to typed updates on the store. The
//! key determines the value type (mode, float, or integer); the router
//! coerces the value token accordingly. A missing value, an unknown key,
//! or an unrecognized enumerated value produces a diagnostic and applies
//! no update, so each config message either lands fully or not at all.

use shoji_protocol::{ConfigKey, SpaceMode, SplitMode, Tokenizer, ValueKind};
use tracing::debug;

use crate::cvar::ConfigStore;
use crate::daemon::MessageError;

/// Route one config message; `tokens` is positioned after the `config`
/// message type token.
pub fn route_config(
    tokens: &mut Tokenizer<'_>,
    cvars: &mut dyn ConfigStore,
) -> Result<(), MessageError> {
    let key_token = tokens.next_token();
    let key = ConfigKey::parse(key_token.as_str()).ok_or_else(|| MessageError::UnknownConfigKey {
        key: key_token.as_str().to_owned(),
    })?;

    let value_token = tokens.next_token();
    if value_token.is_empty() {
        return Err(MessageError::MissingValue {
            key: key.to_string(),
        });
    }
    let value = value_token.as_str();

    match key.kind() {
        ValueKind::SpaceMode => {
            let mode = SpaceMode::from_value(value).ok_or_else(|| invalid(key, value))?;
            debug!(key = %key, value = mode.as_str(), "config update");
            cvars.update_space_mode(key, mode);
        }
        ValueKind::SplitMode => {
            let mode = SplitMode::from_value(value).ok_or_else(|| invalid(key, value))?;
            debug!(key = %key, value = mode.as_str(), "config update");
            cvars.update_split_mode(key, mode);
        }
        ValueKind::Float => {
            let parsed = value.parse::<f32>().map_err(|_| invalid(key, value))?;
            debug!(key = %key, value = parsed, "config update");
            cvars.update_float(key, parsed);
        }
        ValueKind::Int => {
            let parsed = value.parse::<i32>().map_err(|_| invalid(key, value))?;
            debug!(key = %key, value = parsed, "config update");
            cvars.update_int(key, parsed);
        }
    }

    Ok(())
}

fn invalid(key: ConfigKey, value: &str) -> MessageError {
    MessageError::InvalidValue {
        key: key.to_string(),
        value: value.to_owned(),
    }
}
