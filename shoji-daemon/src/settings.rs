//! Daemon settings file
//!
//! `~/.config/shoji/config.toml`, loaded once at startup. `[general]`
//! selects the socket path and the fallback log filter; `[defaults]`
//! overrides the built-in cvar defaults and is applied through the same
//! typed update surface the config router uses at runtime.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shoji_protocol::{ConfigKey, GlobalKey, SpaceMode, SplitMode};
use shoji_utils::{paths, Result, ShojiError};

use crate::cvar::ConfigStore;

/// Root settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub defaults: CvarDefaults,
}

/// Daemon-level settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Override for the daemon socket path
    pub socket_path: Option<PathBuf>,
    /// Log filter applied when SHOJI_LOG is unset
    pub log_filter: Option<String>,
}

/// Startup overrides for the well-known cvars.
///
/// Only the fields present in the file are applied; everything else keeps
/// the store's built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CvarDefaults {
    pub space_mode: Option<SpaceMode>,
    pub bsp_split_mode: Option<SplitMode>,
    pub bsp_split_ratio: Option<f32>,
    pub bsp_optimal_ratio: Option<f32>,
    pub bsp_spawn_left: Option<i32>,
    pub space_offset_top: Option<f32>,
    pub space_offset_bottom: Option<f32>,
    pub space_offset_left: Option<f32>,
    pub space_offset_right: Option<f32>,
    pub space_offset_gap: Option<f32>,
    pub window_float_topmost: Option<i32>,
    pub window_float_next: Option<i32>,
    pub mouse_follows_focus: Option<i32>,
}

impl CvarDefaults {
    /// Seed the store with the overrides present in the file
    pub fn apply(&self, cvars: &mut dyn ConfigStore) {
        if let Some(mode) = self.space_mode {
            cvars.update_space_mode(ConfigKey::Global(GlobalKey::SpaceMode), mode);
        }
        if let Some(mode) = self.bsp_split_mode {
            cvars.update_split_mode(ConfigKey::Global(GlobalKey::BspSplitMode), mode);
        }

        let floats = [
            (GlobalKey::BspSplitRatio, self.bsp_split_ratio),
            (GlobalKey::BspOptimalRatio, self.bsp_optimal_ratio),
            (GlobalKey::SpaceOffsetTop, self.space_offset_top),
            (GlobalKey::SpaceOffsetBottom, self.space_offset_bottom),
            (GlobalKey::SpaceOffsetLeft, self.space_offset_left),
            (GlobalKey::SpaceOffsetRight, self.space_offset_right),
            (GlobalKey::SpaceOffsetGap, self.space_offset_gap),
        ];
        for (key, value) in floats {
            if let Some(value) = value {
                cvars.update_float(ConfigKey::Global(key), value);
            }
        }

        let ints = [
            (GlobalKey::BspSpawnLeft, self.bsp_spawn_left),
            (GlobalKey::WindowFloatTopmost, self.window_float_topmost),
            (GlobalKey::WindowFloatNext, self.window_float_next),
            (GlobalKey::MouseFollowsFocus, self.mouse_follows_focus),
        ];
        for (key, value) in ints {
            if let Some(value) = value {
                cvars.update_int(ConfigKey::Global(key), value);
            }
        }
    }
}

impl Settings {
    /// Load settings from the default location; a missing file means
    /// defaults
    pub fn load() -> Result<Settings> {
        let path = paths::config_file();
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            Ok(Settings::default())
        }
    }

    /// Load settings from a specific path
    pub fn load_from_path(path: &Path) -> Result<Settings> {
        let content = std::fs::read_to_string(path).map_err(|e| ShojiError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content, path)
    }

    /// Parse settings from a TOML string
    pub fn parse(content: &str, path: &Path) -> Result<Settings> {
        toml::from_str(content).map_err(|e| ShojiError::ConfigInvalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        if let Some(ratio) = self.defaults.bsp_split_ratio {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ShojiError::config(
                    "bsp_split_ratio must be between 0.0 and 1.0",
                ));
            }
        }

        if let Some(ratio) = self.defaults.bsp_optimal_ratio {
            if ratio <= 0.0 {
                return Err(ShojiError::config("bsp_optimal_ratio must be positive"));
            }
        }

        Ok(())
    }

    /// Load and validate
    pub fn load_and_validate() -> Result<Settings> {
        let settings = Self::load()?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cvar::CvarStore;

    #[test]
    fn test_empty_file_keeps_builtin_defaults() {
        let settings = Settings::parse("", Path::new("test.toml")).unwrap();
        let mut store = CvarStore::new();
        settings.defaults.apply(&mut store);

        assert_eq!(store.split_ratio(), 0.5);
        assert_eq!(store.space_mode(0), SpaceMode::Bsp);
    }

    #[test]
    fn test_defaults_section_overrides_store() {
        let content = r#"
            [defaults]
            space_mode = "monocle"
            bsp_split_mode = "vertical"
            bsp_split_ratio = 0.4
            space_offset_gap = 10.0
            mouse_follows_focus = 1
        "#;
        let settings = Settings::parse(content, Path::new("test.toml")).unwrap();
        let mut store = CvarStore::new();
        settings.defaults.apply(&mut store);

        assert_eq!(store.space_mode(0), SpaceMode::Monocle);
        assert_eq!(store.bsp_split_mode(), SplitMode::Vertical);
        assert_eq!(store.split_ratio(), 0.4);
        assert_eq!(store.float_value(GlobalKey::SpaceOffsetGap), 10.0);
        assert_eq!(store.int_value(GlobalKey::MouseFollowsFocus), 1);
        // Untouched fields keep the built-in default
        assert_eq!(store.float_value(GlobalKey::BspOptimalRatio), 1.618);
    }

    #[test]
    fn test_general_section() {
        let content = r#"
            [general]
            socket_path = "/tmp/shoji-test.sock"
            log_filter = "debug"
        "#;
        let settings = Settings::parse(content, Path::new("test.toml")).unwrap();

        assert_eq!(
            settings.general.socket_path.as_deref(),
            Some(Path::new("/tmp/shoji-test.sock"))
        );
        assert_eq!(settings.general.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = Settings::parse("[general\nbroken", Path::new("bad.toml"));
        assert!(matches!(result, Err(ShojiError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_unknown_mode_string_rejected() {
        let content = r#"
            [defaults]
            space_mode = "sideways"
        "#;
        assert!(Settings::parse(content, Path::new("bad.toml")).is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_ratio() {
        let settings = Settings {
            defaults: CvarDefaults {
                bsp_split_ratio: Some(1.5),
                ..CvarDefaults::default()
            },
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(ShojiError::Config(_))));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\nbsp_split_ratio = 0.6\n").unwrap();

        let settings = Settings::load_from_path(&path).unwrap();
        assert_eq!(settings.defaults.bsp_split_ratio, Some(0.6));
        settings.validate().unwrap();
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(
            Settings::load_from_path(&path),
            Err(ShojiError::FileRead { .. })
        ));
    }
}
