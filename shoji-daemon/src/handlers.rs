//! Handler seam for window and space actions
//!
//! The command front end parses intent and routes it; the actual tree
//! manipulation (focus, swap, rotation, geometry) lives behind these
//! traits. Handlers receive the already-validated selector string and are
//! infallible at this layer.

use shoji_protocol::{ConfigKey, GlobalKey};
use tracing::info;

use crate::cvar::ConfigStore;

/// Window actions, keyed by the window grammar's flags
pub trait WindowHandler {
    /// `-f <direction>`
    fn focus(&mut self, selector: &str);

    /// `-s <direction>`
    fn swap(&mut self, selector: &str);

    /// `-i <direction>` (previously "mark" window)
    fn use_insertion_point(&mut self, selector: &str);

    /// `-w <direction>`
    fn detach_and_reinsert(&mut self, selector: &str);

    /// `-t float`
    fn toggle(&mut self, selector: &str);

    /// `-r <ratio>`: apply a split ratio for the current command batch.
    /// The dispatcher restores the previous value once the batch ends.
    fn temporary_ratio(&mut self, selector: &str, cvars: &mut dyn ConfigStore);
}

/// Space actions, keyed by the space grammar's flags
pub trait SpaceHandler {
    /// `-r <90|180|270>`
    fn rotate(&mut self, degrees: &str);
}

/// Stand-in window handler that records intent in the log.
///
/// The tree layer owns the real implementations; `temporary_ratio` is the
/// exception and behaves like the real one, writing the split-ratio cvar
/// that the next insertion reads.
#[derive(Debug, Default)]
pub struct LoggingWindowHandler;

impl WindowHandler for LoggingWindowHandler {
    fn focus(&mut self, selector: &str) {
        info!(selector, "focus window");
    }

    fn swap(&mut self, selector: &str) {
        info!(selector, "swap window");
    }

    fn use_insertion_point(&mut self, selector: &str) {
        info!(selector, "set insertion point");
    }

    fn detach_and_reinsert(&mut self, selector: &str) {
        info!(selector, "detach and reinsert window");
    }

    fn toggle(&mut self, selector: &str) {
        info!(selector, "toggle window");
    }

    fn temporary_ratio(&mut self, selector: &str, cvars: &mut dyn ConfigStore) {
        // The parser validated the selector as a float already
        if let Ok(ratio) = selector.parse::<f32>() {
            info!(ratio, "temporary split ratio");
            cvars.update_float(ConfigKey::Global(GlobalKey::BspSplitRatio), ratio);
        }
    }
}

/// Stand-in space handler that records intent in the log
#[derive(Debug, Default)]
pub struct LoggingSpaceHandler;

impl SpaceHandler for LoggingSpaceHandler {
    fn rotate(&mut self, degrees: &str) {
        info!(degrees, "rotate window tree");
    }
}
