//! User settings: compression, filename template, shortcuts.
//!
//! Persisted as camelCase JSON; every field has a default so older files
//! keep loading as fields are added.

mod store;

pub use store::{
    has_stitch_shortcut, load, load_and_migrate, save, settings_path, SettingsError,
};

use serde::{Deserialize, Serialize};

use crate::shortcut::{
    ShortcutBindings, DEFAULT_AREA_SHORTCUT, DEFAULT_FULLSCREEN_SHORTCUT, DEFAULT_STITCH_SHORTCUT,
};

pub const DEFAULT_PREFIX: &str = "llm-scr";

/// One piece of the generated filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Prefix,
    Date,
    Time,
    Quality,
    Dimensions,
    Counter,
    /// Ids written by a newer version; skipped when rendering.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilenameBlock {
    pub id: BlockKind,
    pub enabled: bool,
    pub value: Option<String>,
}

impl FilenameBlock {
    fn new(id: BlockKind, enabled: bool) -> Self {
        Self { id, enabled, value: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilenameTemplate {
    pub blocks: Vec<FilenameBlock>,
    #[serde(default)]
    pub use_counter: bool,
}

impl Default for FilenameTemplate {
    fn default() -> Self {
        Self {
            blocks: vec![
                FilenameBlock {
                    value: Some(DEFAULT_PREFIX.to_string()),
                    ..FilenameBlock::new(BlockKind::Prefix, true)
                },
                FilenameBlock::new(BlockKind::Date, true),
                FilenameBlock::new(BlockKind::Time, true),
                FilenameBlock::new(BlockKind::Quality, true),
                FilenameBlock::new(BlockKind::Dimensions, true),
                FilenameBlock::new(BlockKind::Counter, false),
            ],
            use_counter: false,
        }
    }
}

impl FilenameTemplate {
    pub fn counter_enabled(&self) -> bool {
        self.use_counter
            || self
                .blocks
                .iter()
                .any(|b| b.id == BlockKind::Counter && b.enabled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// JPEG quality, 1..=100.
    #[serde(default = "default_quality")]
    pub quality: u32,
    /// Resize anything wider than this; 0 disables resizing.
    #[serde(default = "default_max_width")]
    pub max_width: u32,
    #[serde(default)]
    pub note_prefix_enabled: bool,
    #[serde(default)]
    pub note_prefix: String,
    #[serde(default)]
    pub filename_template: FilenameTemplate,
    #[serde(default = "default_fullscreen_shortcut")]
    pub fullscreen_shortcut: String,
    #[serde(default = "default_area_shortcut")]
    pub area_shortcut: String,
    #[serde(default = "default_stitch_shortcut")]
    pub stitch_shortcut: String,
}

fn default_quality() -> u32 {
    70
}

fn default_max_width() -> u32 {
    1024
}

fn default_fullscreen_shortcut() -> String {
    DEFAULT_FULLSCREEN_SHORTCUT.to_string()
}

fn default_area_shortcut() -> String {
    DEFAULT_AREA_SHORTCUT.to_string()
}

fn default_stitch_shortcut() -> String {
    DEFAULT_STITCH_SHORTCUT.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: default_quality(),
            max_width: default_max_width(),
            note_prefix_enabled: false,
            note_prefix: String::new(),
            filename_template: FilenameTemplate::default(),
            fullscreen_shortcut: default_fullscreen_shortcut(),
            area_shortcut: default_area_shortcut(),
            stitch_shortcut: default_stitch_shortcut(),
        }
    }
}

impl Settings {
    /// Quality as the JPEG encoder wants it.
    pub fn jpeg_quality(&self) -> u8 {
        self.quality.clamp(1, 100) as u8
    }

    /// Write canonical shortcut strings back from resolved bindings.
    pub fn apply_bindings(&mut self, bindings: &ShortcutBindings) {
        self.fullscreen_shortcut = bindings.fullscreen.to_string();
        self.area_shortcut = bindings.area.to_string();
        self.stitch_shortcut = bindings.stitch.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"quality": 55, "maxWidth": 0}"#).unwrap();
        assert_eq!(settings.quality, 55);
        assert_eq!(settings.max_width, 0);
        assert_eq!(settings.stitch_shortcut, "Cmd+Shift+2");
        assert_eq!(settings.filename_template, FilenameTemplate::default());
    }

    #[test]
    fn serializes_camel_case_block_ids() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["maxWidth"], 1024);
        assert_eq!(json["filenameTemplate"]["blocks"][0]["id"], "prefix");
        assert_eq!(json["filenameTemplate"]["blocks"][0]["value"], "llm-scr");
        assert_eq!(json["filenameTemplate"]["useCounter"], false);
    }

    #[test]
    fn unknown_block_ids_survive_loading() {
        let template: FilenameTemplate = serde_json::from_str(
            r#"{"blocks":[{"id":"emoji","enabled":true,"value":null},{"id":"date","enabled":true,"value":null}],"useCounter":false}"#,
        )
        .unwrap();
        assert_eq!(template.blocks[0].id, BlockKind::Unknown);
        assert_eq!(template.blocks[1].id, BlockKind::Date);
    }

    #[test]
    fn counter_enabled_by_block_or_flag() {
        let mut template = FilenameTemplate::default();
        assert!(!template.counter_enabled());
        template.use_counter = true;
        assert!(template.counter_enabled());
        template.use_counter = false;
        template.blocks.last_mut().unwrap().enabled = true;
        assert!(template.counter_enabled());
    }

    #[test]
    fn quality_is_clamped() {
        let mut settings = Settings::default();
        settings.quality = 0;
        assert_eq!(settings.jpeg_quality(), 1);
        settings.quality = 400;
        assert_eq!(settings.jpeg_quality(), 100);
    }
}
