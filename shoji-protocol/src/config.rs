//! Configuration keys and typed values
//!
//! A `config` message names either a well-known global key or a scoped key
//! of the form `<space-index>_<suffix>` that overrides a setting for one
//! space. The expected value type is determined by the key, never carried
//! on the wire, so the router has to resolve it here before coercing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Layout mode of a space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceMode {
    Bsp,
    Monocle,
    Float,
}

impl SpaceMode {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "bsp" => Some(SpaceMode::Bsp),
            "monocle" => Some(SpaceMode::Monocle),
            "float" => Some(SpaceMode::Float),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpaceMode::Bsp => "bsp",
            SpaceMode::Monocle => "monocle",
            SpaceMode::Float => "float",
        }
    }
}

/// How a bsp node picks the axis for its next split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    Optimal,
    Vertical,
    Horizontal,
}

impl SplitMode {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "optimal" => Some(SplitMode::Optimal),
            "vertical" => Some(SplitMode::Vertical),
            "horizontal" => Some(SplitMode::Horizontal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SplitMode::Optimal => "optimal",
            SplitMode::Vertical => "vertical",
            SplitMode::Horizontal => "horizontal",
        }
    }
}

/// Value type a key expects; resolved from the key, not the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    SpaceMode,
    SplitMode,
    Float,
    Int,
}

/// The fixed set of well-known global configuration keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalKey {
    SpaceMode,
    SpaceOffsetTop,
    SpaceOffsetBottom,
    SpaceOffsetLeft,
    SpaceOffsetRight,
    SpaceOffsetGap,
    BspSpawnLeft,
    BspOptimalRatio,
    BspSplitRatio,
    BspSplitMode,
    WindowFloatTopmost,
    WindowFloatNext,
    MouseFollowsFocus,
}

impl GlobalKey {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "space_mode" => Some(Self::SpaceMode),
            "space_offset_top" => Some(Self::SpaceOffsetTop),
            "space_offset_bottom" => Some(Self::SpaceOffsetBottom),
            "space_offset_left" => Some(Self::SpaceOffsetLeft),
            "space_offset_right" => Some(Self::SpaceOffsetRight),
            "space_offset_gap" => Some(Self::SpaceOffsetGap),
            "bsp_spawn_left" => Some(Self::BspSpawnLeft),
            "bsp_optimal_ratio" => Some(Self::BspOptimalRatio),
            "bsp_split_ratio" => Some(Self::BspSplitRatio),
            "bsp_split_mode" => Some(Self::BspSplitMode),
            "window_float_topmost" => Some(Self::WindowFloatTopmost),
            "window_float_next" => Some(Self::WindowFloatNext),
            "mouse_follows_focus" => Some(Self::MouseFollowsFocus),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::SpaceMode => "space_mode",
            Self::SpaceOffsetTop => "space_offset_top",
            Self::SpaceOffsetBottom => "space_offset_bottom",
            Self::SpaceOffsetLeft => "space_offset_left",
            Self::SpaceOffsetRight => "space_offset_right",
            Self::SpaceOffsetGap => "space_offset_gap",
            Self::BspSpawnLeft => "bsp_spawn_left",
            Self::BspOptimalRatio => "bsp_optimal_ratio",
            Self::BspSplitRatio => "bsp_split_ratio",
            Self::BspSplitMode => "bsp_split_mode",
            Self::WindowFloatTopmost => "window_float_topmost",
            Self::WindowFloatNext => "window_float_next",
            Self::MouseFollowsFocus => "mouse_follows_focus",
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            Self::SpaceMode => ValueKind::SpaceMode,
            Self::BspSplitMode => ValueKind::SplitMode,
            Self::SpaceOffsetTop
            | Self::SpaceOffsetBottom
            | Self::SpaceOffsetLeft
            | Self::SpaceOffsetRight
            | Self::SpaceOffsetGap
            | Self::BspOptimalRatio
            | Self::BspSplitRatio => ValueKind::Float,
            Self::BspSpawnLeft
            | Self::WindowFloatTopmost
            | Self::WindowFloatNext
            | Self::MouseFollowsFocus => ValueKind::Int,
        }
    }
}

/// Suffixes accepted in scoped keys (`<space-index>_<suffix>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopedSuffix {
    Mode,
    Top,
    Bottom,
    Left,
    Right,
    Gap,
}

impl ScopedSuffix {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mode" => Some(Self::Mode),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "gap" => Some(Self::Gap),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Mode => "mode",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Gap => "gap",
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            Self::Mode => ValueKind::SpaceMode,
            _ => ValueKind::Float,
        }
    }
}

/// A classified configuration key.
///
/// The global/scoped distinction is structural: a leading integer and
/// underscore followed by a known suffix makes a key scoped, everything
/// else must match a well-known name exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Global(GlobalKey),
    Scoped { space: u32, suffix: ScopedSuffix },
}

impl ConfigKey {
    /// Classify a key token. `None` means "not a valid config option".
    pub fn parse(key: &str) -> Option<Self> {
        if let Some(global) = GlobalKey::from_name(key) {
            return Some(ConfigKey::Global(global));
        }

        let (index, suffix) = key.split_once('_')?;
        let space = index.parse::<u32>().ok()?;
        let suffix = ScopedSuffix::from_name(suffix)?;
        Some(ConfigKey::Scoped { space, suffix })
    }

    /// Value type this key expects
    pub fn kind(&self) -> ValueKind {
        match self {
            ConfigKey::Global(key) => key.kind(),
            ConfigKey::Scoped { suffix, .. } => suffix.kind(),
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigKey::Global(key) => f.write_str(key.name()),
            ConfigKey::Scoped { space, suffix } => write!(f, "{}_{}", space, suffix.name()),
        }
    }
}
