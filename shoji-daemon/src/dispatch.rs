//! Command-chain dispatch
//!
//! Walks a validated chain in message order and maps each flag directly to
//! its handler. A window batch captures the split ratio before the walk and
//! restores it afterwards if a temporary-ratio command changed it, so
//! unrelated tree operations never see a leaked transient value. Space
//! batches have no transient side effect and no restore step.

use shoji_protocol::{CommandChain, ConfigKey, GlobalKey};
use tracing::{debug, warn};

use crate::cvar::ConfigStore;
use crate::handlers::{SpaceHandler, WindowHandler};

/// Execute a window command chain
pub fn dispatch_window(
    chain: &CommandChain,
    windows: &mut dyn WindowHandler,
    cvars: &mut dyn ConfigStore,
) {
    let ratio = cvars.split_ratio();

    for command in chain {
        debug!(flag = %command.flag, arg = %command.arg, "window command");
        match command.flag {
            'f' => windows.focus(&command.arg),
            's' => windows.swap(&command.arg),
            'i' => windows.use_insertion_point(&command.arg),
            'w' => windows.detach_and_reinsert(&command.arg),
            't' => windows.toggle(&command.arg),
            'r' => windows.temporary_ratio(&command.arg, cvars),
            other => warn!(flag = %other, "window flag without handler"),
        }
    }

    // A temporary ratio lives for exactly one batch
    if cvars.split_ratio() != ratio {
        cvars.update_float(ConfigKey::Global(GlobalKey::BspSplitRatio), ratio);
    }
}

/// Execute a space command chain
pub fn dispatch_space(chain: &CommandChain, spaces: &mut dyn SpaceHandler) {
    for command in chain {
        debug!(flag = %command.flag, arg = %command.arg, "space command");
        match command.flag {
            'r' => spaces.rotate(&command.arg),
            other => warn!(flag = %other, "space flag without handler"),
        }
    }
}
