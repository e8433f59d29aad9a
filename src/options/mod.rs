//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (camera presets, door swing, initial materials,
//! scene naming rules, keybindings, frame pacing) are consolidated here.
//! Options serialize to/from TOML so a showroom setup can be saved as a
//! preset and reloaded.

mod camera;
mod doors;
mod frame;
mod keybindings;
mod materials;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use doors::DoorOptions;
pub use frame::FrameOptions;
pub use keybindings::KeybindingOptions;
pub use materials::MaterialOptions;
pub use scene::SceneRules;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ShowroomError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[doors]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection, orbit, and near/far presets.
    pub camera: CameraOptions,
    /// Door swing parameters.
    pub doors: DoorOptions,
    /// Initial body and glass material values.
    pub materials: MaterialOptions,
    /// Node-name rules for the role table.
    #[schemars(skip)]
    pub scene: SceneRules,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Host frame pacing.
    pub frame: FrameOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ShowroomError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| ShowroomError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ShowroomError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ShowroomError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ShowroomError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(ShowroomError::Io)
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
    use crate::input::KeyAction;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[doors]
open_angle_deg = 75.0
easing = "cubic_out"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.doors.open_angle_deg, 75.0);
        assert_eq!(opts.doors.easing, EasingFunction::CubicOut);
        assert_eq!(opts.doors.duration_ms, 1000);
        assert_eq!(opts.camera.transition_ms, 2000);
        assert_eq!(opts.materials.body.metalness, 1.0);
    }

    #[test]
    fn partial_material_keeps_its_own_base() {
        use crate::material::MaterialParams;

        let toml_str = r#"
[materials.glass]
roughness = 0.1
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        let glass = opts.materials.glass;
        assert_eq!(glass.roughness, 0.1);
        assert_eq!(glass.transmission, 1.0);
        assert_eq!(glass.metalness, MaterialParams::glass().metalness);
        assert_eq!(glass.base_color, MaterialParams::glass().base_color);
        assert_eq!(opts.materials.body, MaterialParams::body_paint());
    }

    #[test]
    fn partial_body_keeps_paint_base() {
        use crate::material::MaterialParams;

        let opts = Options::from_toml_str("[materials.body]\nmetalness = 0.3\n").unwrap();
        assert_eq!(opts.materials.body.metalness, 0.3);
        assert_eq!(opts.materials.body.clearcoat, 1.0);
        assert_eq!(opts.materials.glass, MaterialParams::glass());
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = Options::from_toml_str("[doors\nopen_angle_deg = ").unwrap_err();
        assert!(matches!(err, ShowroomError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyN"), Some(KeyAction::MoveNear));
        assert_eq!(
            opts.keybindings.lookup("KeyL"),
            Some(KeyAction::ToggleLeftDoor)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn keybindings_survive_reload() {
        let toml_str = r#"
[keybindings.bindings]
move_near = "KeyW"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::MoveNear));
        assert_eq!(opts.keybindings.lookup("KeyN"), None);
    }

    #[test]
    fn save_and_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("showroom-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.materials.body.metalness = 0.4;
        opts.save(&dir.join("matte.toml")).unwrap();

        let loaded = Options::load(&dir.join("matte.toml")).unwrap();
        assert_eq!(loaded.materials.body.metalness, 0.4);
        assert_eq!(Options::list_presets(&dir), vec!["matte".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("doors"));
        assert!(props.contains_key("materials"));
        assert!(props.contains_key("frame"));
        assert!(!props.contains_key("scene"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("far_eye").is_none());
    }
}
