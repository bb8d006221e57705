//! Orientation cube configuration with TOML preset support.
//!
//! Sync behavior, transition timing, cube geometry, orbit control, panel
//! style and zone labels are consolidated here. Options serialize to and
//! from TOML so hosts can ship presets.

mod camera;
mod cube;
mod locale;
mod style;
mod sync;
mod transition;

use std::path::Path;

pub use camera::CameraOptions;
pub use cube::CubeOptions;
pub use locale::LocaleOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use style::{HoverStyle, KindStyle, StyleOptions, TextStyle};
pub use sync::{SyncMode, SyncOptions};
pub use transition::TransitionOptions;

use crate::error::CubeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[sync]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera sync between the two viewports.
    pub sync: SyncOptions,
    /// Zone-selection animation.
    pub transition: TransitionOptions,
    /// Cube geometry and clickable zone kinds.
    pub cube: CubeOptions,
    /// Orbit control parameters.
    pub camera: CameraOptions,
    /// Panel colors and label settings.
    #[schemars(skip)]
    pub style: StyleOptions,
    /// Zone labels.
    #[schemars(skip)]
    pub locale: LocaleOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`CubeError::Io`] if the file cannot be read,
    /// [`CubeError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, CubeError> {
        let content = std::fs::read_to_string(path)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| CubeError::OptionsParse(e.to_string()))?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), CubeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CubeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::EasingFunction;
    use crate::orientation::{Zone, ZoneKind};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[sync]
frequency_ms = 250
mode = "free_rotation"

[locale.labels]
north = "N"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.sync.frequency_ms, 250);
        assert_eq!(opts.sync.mode, SyncMode::FreeRotation);
        // Everything else should be default
        assert!(opts.sync.enabled);
        assert_eq!(opts.transition.duration_ms, 1000);
        assert_eq!(opts.transition.easing, EasingFunction::Linear);
        assert_eq!(opts.cube.radius, 5.0);
        assert_eq!(opts.locale.label(Zone::North), "N");
        assert_eq!(opts.locale.label(Zone::TopNorthEast), "TNE");
    }

    #[test]
    fn sync_mode_codes() {
        assert_eq!(SyncMode::from_code(0), Some(SyncMode::FocusTarget));
        assert_eq!(SyncMode::from_code(1), Some(SyncMode::FreeRotation));
        assert_eq!(SyncMode::from_code(7), None);
        assert_eq!(SyncMode::FreeRotation.code(), 1);
    }

    #[test]
    fn cube_geometry_follows_widget_size() {
        let mut cube = CubeOptions::default();
        assert_eq!(cube.cube_size(), 2.5);
        cube.widget_height = 80;
        cube.corner_nodes = false;
        assert_eq!(cube.cube_size(), 1.0);
        assert!(!cube.toggles().enabled(ZoneKind::Corner));
        assert!(cube.toggles().enabled(ZoneKind::Edge));
    }

    #[test]
    fn style_per_kind() {
        let style = StyleOptions::default();
        assert_eq!(style.for_kind(ZoneKind::Corner).text, [1.0, 0.0, 0.0]);
        assert_eq!(style.for_kind(ZoneKind::Edge).background, [1.0; 3]);
        assert!(style.shows_label(ZoneKind::Face));
    }

    #[test]
    fn save_then_load_and_list() {
        let dir = std::env::temp_dir()
            .join(format!("viewcube-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.sync.frequency_ms = 400;
        opts.save(&dir.join("slow.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("slow.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["slow".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let path = std::env::temp_dir()
            .join(format!("viewcube-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[sync]\nfrequency_ms = \"fast\"\n").unwrap();
        let result = Options::load(&path);
        assert!(matches!(result, Err(CubeError::OptionsParse(_))));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Options::load(Path::new("/nonexistent/viewcube.toml"));
        assert!(matches!(result, Err(CubeError::Io(_))));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("sync"));
        assert!(props.contains_key("transition"));
        assert!(props.contains_key("cube"));
        assert!(props.contains_key("camera"));

        // Skipped sections should be absent
        assert!(!props.contains_key("style"));
        assert!(!props.contains_key("locale"));

        let sync = &props["sync"]["properties"];
        assert!(sync.get("frequency_ms").is_some());
        assert!(sync.get("mode").is_some());

        let camera = &props["camera"]["properties"];
        assert!(camera.get("rotate_speed").is_some());
        assert!(camera.get("min_distance").is_none());
    }
}
