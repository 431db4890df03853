//! Configuration store with per-space overrides
//!
//! The command front end only ever talks to the store through the
//! [`ConfigStore`] trait; the daemon injects a [`CvarStore`], tests inject
//! recorders. A scoped update (`3_top`, `2_mode`) shadows the matching
//! global value for that space only; lookups fall back to the global.

use std::collections::HashMap;

use shoji_protocol::{ConfigKey, GlobalKey, ScopedSuffix, SpaceMode, SplitMode};

/// Typed update surface used by the config router and the dispatcher
pub trait ConfigStore {
    fn update_space_mode(&mut self, key: ConfigKey, mode: SpaceMode);
    fn update_split_mode(&mut self, key: ConfigKey, mode: SplitMode);
    fn update_float(&mut self, key: ConfigKey, value: f32);
    fn update_int(&mut self, key: ConfigKey, value: i32);

    /// Current bsp split ratio; the dispatcher's capture/restore hook
    fn split_ratio(&self) -> f32;
}

/// A stored configuration value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CvarValue {
    SpaceMode(SpaceMode),
    SplitMode(SplitMode),
    Float(f32),
    Int(i32),
}

/// In-memory configuration store owned by the dispatch task
#[derive(Debug, Clone)]
pub struct CvarStore {
    globals: HashMap<GlobalKey, CvarValue>,
    scoped: HashMap<(u32, ScopedSuffix), CvarValue>,
}

impl Default for CvarStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CvarStore {
    /// Create a store seeded with the built-in defaults
    pub fn new() -> Self {
        let mut globals = HashMap::new();
        globals.insert(GlobalKey::SpaceMode, CvarValue::SpaceMode(SpaceMode::Bsp));
        globals.insert(
            GlobalKey::BspSplitMode,
            CvarValue::SplitMode(SplitMode::Optimal),
        );
        globals.insert(GlobalKey::BspSplitRatio, CvarValue::Float(0.5));
        globals.insert(GlobalKey::BspOptimalRatio, CvarValue::Float(1.618));
        globals.insert(GlobalKey::BspSpawnLeft, CvarValue::Int(0));
        globals.insert(GlobalKey::SpaceOffsetTop, CvarValue::Float(0.0));
        globals.insert(GlobalKey::SpaceOffsetBottom, CvarValue::Float(0.0));
        globals.insert(GlobalKey::SpaceOffsetLeft, CvarValue::Float(0.0));
        globals.insert(GlobalKey::SpaceOffsetRight, CvarValue::Float(0.0));
        globals.insert(GlobalKey::SpaceOffsetGap, CvarValue::Float(0.0));
        globals.insert(GlobalKey::WindowFloatTopmost, CvarValue::Int(0));
        globals.insert(GlobalKey::WindowFloatNext, CvarValue::Int(0));
        globals.insert(GlobalKey::MouseFollowsFocus, CvarValue::Int(0));

        Self {
            globals,
            scoped: HashMap::new(),
        }
    }

    fn set(&mut self, key: ConfigKey, value: CvarValue) {
        match key {
            ConfigKey::Global(global) => {
                self.globals.insert(global, value);
            }
            ConfigKey::Scoped { space, suffix } => {
                self.scoped.insert((space, suffix), value);
            }
        }
    }

    /// Global value for a float-typed key (0.0 when never set)
    pub fn float_value(&self, key: GlobalKey) -> f32 {
        match self.globals.get(&key) {
            Some(CvarValue::Float(value)) => *value,
            _ => 0.0,
        }
    }

    /// Global value for an int-typed key (0 when never set)
    pub fn int_value(&self, key: GlobalKey) -> i32 {
        match self.globals.get(&key) {
            Some(CvarValue::Int(value)) => *value,
            _ => 0,
        }
    }

    /// Layout mode for a space: per-space override, else the global mode
    pub fn space_mode(&self, space: u32) -> SpaceMode {
        if let Some(CvarValue::SpaceMode(mode)) = self.scoped.get(&(space, ScopedSuffix::Mode)) {
            return *mode;
        }
        match self.globals.get(&GlobalKey::SpaceMode) {
            Some(CvarValue::SpaceMode(mode)) => *mode,
            _ => SpaceMode::Bsp,
        }
    }

    /// Global split mode
    pub fn bsp_split_mode(&self) -> SplitMode {
        match self.globals.get(&GlobalKey::BspSplitMode) {
            Some(CvarValue::SplitMode(mode)) => *mode,
            _ => SplitMode::Optimal,
        }
    }

    /// Offset for a space: per-space override layered over the global value
    pub fn offset(&self, space: u32, suffix: ScopedSuffix) -> f32 {
        if let Some(CvarValue::Float(value)) = self.scoped.get(&(space, suffix)) {
            return *value;
        }
        self.float_value(global_for_suffix(suffix))
    }
}

fn global_for_suffix(suffix: ScopedSuffix) -> GlobalKey {
    match suffix {
        ScopedSuffix::Mode => GlobalKey::SpaceMode,
        ScopedSuffix::Top => GlobalKey::SpaceOffsetTop,
        ScopedSuffix::Bottom => GlobalKey::SpaceOffsetBottom,
        ScopedSuffix::Left => GlobalKey::SpaceOffsetLeft,
        ScopedSuffix::Right => GlobalKey::SpaceOffsetRight,
        ScopedSuffix::Gap => GlobalKey::SpaceOffsetGap,
    }
}

impl ConfigStore for CvarStore {
    fn update_space_mode(&mut self, key: ConfigKey, mode: SpaceMode) {
        self.set(key, CvarValue::SpaceMode(mode));
    }

    fn update_split_mode(&mut self, key: ConfigKey, mode: SplitMode) {
        self.set(key, CvarValue::SplitMode(mode));
    }

    fn update_float(&mut self, key: ConfigKey, value: f32) {
        self.set(key, CvarValue::Float(value));
    }

    fn update_int(&mut self, key: ConfigKey, value: i32) {
        self.set(key, CvarValue::Int(value));
    }

    fn split_ratio(&self) -> f32 {
        self.float_value(GlobalKey::BspSplitRatio)
    }
}
