//! Profile editor controller.
//!
//! Owns the display/edit mode and drives every bound surface from it.
//! Surfaces are injected through [`Surfaces`], so the same controller runs
//! against the browser DOM and against in-memory fakes.

use pe_preview::{DataUri, PictureFile, PreviewError, encode_first};
use pe_types::{EditorConfig, FULL_OPACITY, ProfileData, ProfileEdit, UiMode};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

// ── Surface capabilities ──

pub trait Toggle {
    fn set_visible(&self, visible: bool);
}

pub trait TextSurface: Toggle {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

pub trait TextField: Toggle {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

pub trait ImageSurface {
    fn set_source(&self, source: &str);
    fn set_opacity(&self, opacity: f64);
}

/// Concrete handle types for one hosting platform.
pub trait SurfaceKit {
    type Trigger: Toggle;
    type Field: TextField;
    type Text: TextSurface;
    type Picker: Toggle;
    type Image: ImageSurface + Clone;
}

/// Non-owning handles to the eight surfaces the editor drives.
pub struct Surfaces<K: SurfaceKit> {
    pub edit_trigger: K::Trigger,
    pub save_trigger: K::Trigger,
    pub name_input: K::Field,
    pub bio_input: K::Field,
    pub name_display: K::Text,
    pub bio_display: K::Text,
    pub picture_input: K::Picker,
    pub picture_preview: K::Image,
}

// ── Errors ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    EnterEdit,
    Save,
}

impl fmt::Display for EditorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorAction::EnterEdit => f.write_str("enter edit mode"),
            EditorAction::Save => f.write_str("save changes"),
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("cannot {action} while in {from} mode")]
    InvalidTransition { from: UiMode, action: EditorAction },
}

// ── Controller ──

pub struct ProfileEditor<K: SurfaceKit> {
    surfaces: Surfaces<K>,
    mode: UiMode,
    dimmed_opacity: f64,
}

impl<K: SurfaceKit> ProfileEditor<K> {
    /// Take ownership of the handles and force the display layout, whatever
    /// state the host markup started in.
    pub fn new(surfaces: Surfaces<K>, config: &EditorConfig) -> Self {
        let editor = Self {
            surfaces,
            mode: UiMode::Display,
            dimmed_opacity: config.dimmed_opacity(),
        };
        editor.apply_layout(UiMode::Display);
        editor.surfaces.picture_preview.set_opacity(FULL_OPACITY);
        editor
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn surfaces(&self) -> &Surfaces<K> {
        &self.surfaces
    }

    pub fn profile(&self) -> ProfileData {
        ProfileData {
            name: self.surfaces.name_display.text(),
            bio: self.surfaces.bio_display.text(),
        }
    }

    pub fn enter_edit_mode(&mut self) -> Result<(), EditorError> {
        self.expect_mode(UiMode::Display, EditorAction::EnterEdit)?;

        let current = self.profile();
        self.surfaces.picture_preview.set_opacity(self.dimmed_opacity);
        self.surfaces.name_input.set_value(&current.name);
        self.surfaces.bio_input.set_value(&current.bio);
        self.apply_layout(UiMode::Edit);
        self.mode = UiMode::Edit;

        debug!(name = %current.name, "entered edit mode");
        Ok(())
    }

    /// Returns the profile as displayed after the save.
    pub fn save_changes(&mut self) -> Result<ProfileData, EditorError> {
        self.expect_mode(UiMode::Edit, EditorAction::Save)?;

        let edit = ProfileEdit {
            name: self.surfaces.name_input.value(),
            bio: self.surfaces.bio_input.value(),
        };
        let current = self.profile();
        let updated = current.merged_with(&edit);
        if updated.name != current.name {
            self.surfaces.name_display.set_text(&updated.name);
        }
        if updated.bio != current.bio {
            self.surfaces.bio_display.set_text(&updated.bio);
        }

        self.surfaces.picture_preview.set_opacity(FULL_OPACITY);
        self.apply_layout(UiMode::Display);
        self.mode = UiMode::Display;

        debug!(
            name_changed = updated.name != current.name,
            bio_changed = updated.bio != current.bio,
            "saved profile changes"
        );
        Ok(updated)
    }

    pub fn previewer(&self) -> PicturePreviewer<K::Image> {
        PicturePreviewer {
            preview: self.surfaces.picture_preview.clone(),
        }
    }

    fn expect_mode(&self, required: UiMode, action: EditorAction) -> Result<(), EditorError> {
        if self.mode == required {
            return Ok(());
        }
        let err = EditorError::InvalidTransition {
            from: self.mode,
            action,
        };
        warn!(%err, "ignoring profile editor action");
        Err(err)
    }

    /// Every visibility flag is derived from `mode` here and nowhere else.
    fn apply_layout(&self, mode: UiMode) {
        let displays = mode.displays_visible();
        let inputs = mode.inputs_visible();
        let s = &self.surfaces;

        s.name_display.set_visible(displays);
        s.bio_display.set_visible(displays);
        s.edit_trigger.set_visible(displays);

        s.name_input.set_visible(inputs);
        s.bio_input.set_visible(inputs);
        s.picture_input.set_visible(inputs);
        s.save_trigger.set_visible(inputs);
    }
}

// ── Picture preview ──

/// Writes selected pictures into the preview surface.
///
/// Detached from the editor so a pending read never holds a borrow of it.
/// Reads are not cancelled: when selections overlap, each read still
/// completes and the preview shows whichever finished last.
#[derive(Clone)]
pub struct PicturePreviewer<I> {
    preview: I,
}

impl<I: ImageSurface> PicturePreviewer<I> {
    pub fn new(preview: I) -> Self {
        Self { preview }
    }

    /// Reads the first selected file and shows it. On any error the preview
    /// keeps its current source.
    pub async fn preview_selected_image<F: PictureFile>(
        &self,
        files: &[F],
    ) -> Result<DataUri, PreviewError> {
        match encode_first(files).await {
            Ok(uri) => {
                self.preview.set_source(uri.as_str());
                Ok(uri)
            }
            Err(err) => {
                warn!(%err, "picture preview not updated");
                Err(err)
            }
        }
    }
}
