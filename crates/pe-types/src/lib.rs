use serde::{Deserialize, Serialize};
use std::fmt;

pub const FULL_OPACITY: f64 = 1.0;
pub const DEFAULT_DIMMED_OPACITY: f64 = 0.5;

/// Which of the two mutually exclusive layouts the editor is showing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UiMode {
    #[default]
    Display,
    Edit,
}

impl UiMode {
    pub fn displays_visible(self) -> bool {
        self == UiMode::Display
    }

    pub fn inputs_visible(self) -> bool {
        self == UiMode::Edit
    }
}

impl fmt::Display for UiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiMode::Display => f.write_str("display"),
            UiMode::Edit => f.write_str("edit"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceRole {
    EditTrigger,
    SaveTrigger,
    NameInput,
    BioInput,
    NameDisplay,
    BioDisplay,
    PictureInput,
    PicturePreview,
}

impl SurfaceRole {
    pub const ALL: [SurfaceRole; 8] = [
        SurfaceRole::EditTrigger,
        SurfaceRole::SaveTrigger,
        SurfaceRole::NameInput,
        SurfaceRole::BioInput,
        SurfaceRole::NameDisplay,
        SurfaceRole::BioDisplay,
        SurfaceRole::PictureInput,
        SurfaceRole::PicturePreview,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SurfaceRole::EditTrigger => "edit-trigger",
            SurfaceRole::SaveTrigger => "save-trigger",
            SurfaceRole::NameInput => "name-input",
            SurfaceRole::BioInput => "bio-input",
            SurfaceRole::NameDisplay => "name-display",
            SurfaceRole::BioDisplay => "bio-display",
            SurfaceRole::PictureInput => "picture-input",
            SurfaceRole::PicturePreview => "picture-preview",
        }
    }
}

impl fmt::Display for SurfaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Profile values as currently shown by the display surfaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileData {
    pub name: String,
    pub bio: String,
}

/// Raw input field values captured when the user saves.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileEdit {
    pub name: String,
    pub bio: String,
}

impl ProfileData {
    /// Apply an edit field by field. A field whose input is blank after
    /// trimming keeps its current value; otherwise the raw input wins,
    /// surrounding whitespace included.
    pub fn merged_with(&self, edit: &ProfileEdit) -> ProfileData {
        ProfileData {
            name: accepted_value(&edit.name).unwrap_or(&self.name).to_owned(),
            bio: accepted_value(&edit.bio).unwrap_or(&self.bio).to_owned(),
        }
    }
}

pub fn accepted_value(raw: &str) -> Option<&str> {
    if raw.trim().is_empty() { None } else { Some(raw) }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub edit_trigger: String,
    pub save_trigger: String,
    pub name_input: String,
    pub bio_input: String,
    pub name_display: String,
    pub bio_display: String,
    pub picture_input: String,
    pub picture_preview: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            edit_trigger: "editBtn".to_owned(),
            save_trigger: "saveBtn".to_owned(),
            name_input: "nameInput".to_owned(),
            bio_input: "bioInput".to_owned(),
            name_display: "displayName".to_owned(),
            bio_display: "displayBio".to_owned(),
            picture_input: "profilePicInput".to_owned(),
            picture_preview: "profilePreview".to_owned(),
        }
    }
}

impl ElementIds {
    pub fn id_for(&self, role: SurfaceRole) -> &str {
        match role {
            SurfaceRole::EditTrigger => &self.edit_trigger,
            SurfaceRole::SaveTrigger => &self.save_trigger,
            SurfaceRole::NameInput => &self.name_input,
            SurfaceRole::BioInput => &self.bio_input,
            SurfaceRole::NameDisplay => &self.name_display,
            SurfaceRole::BioDisplay => &self.bio_display,
            SurfaceRole::PictureInput => &self.picture_input,
            SurfaceRole::PicturePreview => &self.picture_preview,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub element_ids: ElementIds,
    pub dimmed_opacity: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            element_ids: ElementIds::default(),
            dimmed_opacity: DEFAULT_DIMMED_OPACITY,
        }
    }
}

impl EditorConfig {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Opacity applied to the preview while editing, clamped to `[0, 1]`.
    pub fn dimmed_opacity(&self) -> f64 {
        if self.dimmed_opacity.is_nan() {
            return DEFAULT_DIMMED_OPACITY;
        }
        self.dimmed_opacity.clamp(0.0, FULL_OPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> ProfileData {
        ProfileData {
            name: "Alice".to_owned(),
            bio: "Hello".to_owned(),
        }
    }

    #[test]
    fn blank_fields_keep_previous_values() {
        let edit = ProfileEdit {
            name: "   ".to_owned(),
            bio: String::new(),
        };
        assert_eq!(alice().merged_with(&edit), alice());
    }

    #[test]
    fn fields_update_independently_with_raw_value() {
        let edit = ProfileEdit {
            name: "  Bob  ".to_owned(),
            bio: "\t\n".to_owned(),
        };
        let merged = alice().merged_with(&edit);
        assert_eq!(merged.name, "  Bob  ");
        assert_eq!(merged.bio, "Hello");
    }

    #[test]
    fn mode_layout_is_complementary() {
        for mode in [UiMode::Display, UiMode::Edit] {
            assert_ne!(mode.displays_visible(), mode.inputs_visible());
        }
        assert_eq!(UiMode::default(), UiMode::Display);
    }

    #[test]
    fn config_defaults_match_profile_page_ids() {
        let config = EditorConfig::default();
        assert_eq!(config.element_ids.id_for(SurfaceRole::EditTrigger), "editBtn");
        assert_eq!(config.element_ids.id_for(SurfaceRole::PicturePreview), "profilePreview");
        assert_eq!(config.dimmed_opacity(), DEFAULT_DIMMED_OPACITY);
    }

    #[test]
    fn partial_config_json_fills_defaults() -> anyhow::Result<()> {
        let config = EditorConfig::from_json(
            r#"{ "elementIds": { "nameInput": "profileName" }, "dimmedOpacity": 3.0 }"#,
        )?;
        assert_eq!(config.element_ids.name_input, "profileName");
        assert_eq!(config.element_ids.bio_input, "bioInput");
        assert_eq!(config.dimmed_opacity(), FULL_OPACITY);
        Ok(())
    }

    #[test]
    fn every_role_has_a_distinct_default_id() {
        let ids = ElementIds::default();
        let mut seen: Vec<&str> = SurfaceRole::ALL.iter().map(|role| ids.id_for(*role)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), SurfaceRole::ALL.len());
    }
}
