//! DOM element bindings.
//!
//! All eight profile surfaces are resolved once at startup from the
//! configured element ids, then wrapped in the handle types the editor
//! controller drives.

use pe_editor_core::{ImageSurface, SurfaceKit, Surfaces, TextField, TextSurface, Toggle};
use pe_types::{ElementIds, SurfaceRole};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, HtmlImageElement, HtmlInputElement, HtmlTextAreaElement};

// ── Helpers ──

pub fn by_id(id: &str) -> Option<Element> {
    gloo_utils::document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

/// Show or hide through inline `display`, matching the profile page markup.
pub fn set_shown(el: &HtmlElement, shown: bool) {
    let _ = el
        .style()
        .set_property("display", if shown { "block" } else { "none" });
}

pub fn set_opacity(el: &HtmlElement, opacity: f64) {
    let _ = el.style().set_property("opacity", &opacity.to_string());
}

// ── Surface handles ──

#[derive(Clone)]
pub struct DomElement(pub HtmlElement);

impl Toggle for DomElement {
    fn set_visible(&self, visible: bool) {
        set_shown(&self.0, visible);
    }
}

impl TextSurface for DomElement {
    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Name and bio inputs may be `<input>` or `<textarea>`.
#[derive(Clone)]
pub enum DomField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl DomField {
    fn html(&self) -> &HtmlElement {
        match self {
            DomField::Input(el) => el,
            DomField::TextArea(el) => el,
        }
    }
}

impl Toggle for DomField {
    fn set_visible(&self, visible: bool) {
        set_shown(self.html(), visible);
    }
}

impl TextField for DomField {
    // Raw value: trimming is the editor's decision, not the binding's.
    fn value(&self) -> String {
        match self {
            DomField::Input(el) => el.value(),
            DomField::TextArea(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            DomField::Input(el) => el.set_value(value),
            DomField::TextArea(el) => el.set_value(value),
        }
    }
}

#[derive(Clone)]
pub struct DomPicker(pub HtmlInputElement);

impl Toggle for DomPicker {
    fn set_visible(&self, visible: bool) {
        set_shown(&self.0, visible);
    }
}

#[derive(Clone)]
pub struct DomImage(pub HtmlImageElement);

impl ImageSurface for DomImage {
    fn set_source(&self, source: &str) {
        self.0.set_src(source);
    }

    fn set_opacity(&self, opacity: f64) {
        set_opacity(&self.0, opacity);
    }
}

pub struct DomKit;

impl SurfaceKit for DomKit {
    type Trigger = DomElement;
    type Field = DomField;
    type Text = DomElement;
    type Picker = DomPicker;
    type Image = DomImage;
}

// ── Elements struct ──

/// All DOM element references used by the profile editor.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub edit_trigger: HtmlElement,
    pub save_trigger: HtmlElement,
    pub name_input: DomField,
    pub bio_input: DomField,
    pub name_display: HtmlElement,
    pub bio_display: HtmlElement,
    pub picture_input: HtmlInputElement,
    pub picture_preview: HtmlImageElement,
}

fn missing(role: SurfaceRole, id: &str) -> JsValue {
    JsValue::from_str(&format!("missing {} element #{}", role, id))
}

macro_rules! get_typed {
    ($ids:expr, $role:expr, $ty:ty) => {{
        let id = $ids.id_for($role);
        by_id_typed::<$ty>(id).ok_or_else(|| missing($role, id))?
    }};
}

fn get_field(ids: &ElementIds, role: SurfaceRole) -> Result<DomField, JsValue> {
    let id = ids.id_for(role);
    let el = by_id(id).ok_or_else(|| missing(role, id))?;
    let el = match el.dyn_into::<HtmlInputElement>() {
        Ok(input) => return Ok(DomField::Input(input)),
        Err(el) => el,
    };
    el.dyn_into::<HtmlTextAreaElement>()
        .map(DomField::TextArea)
        .map_err(|_| missing(role, id))
}

impl Elements {
    /// Resolve all DOM references. Call once after the page has loaded.
    pub fn bind(ids: &ElementIds) -> Result<Elements, JsValue> {
        Ok(Elements {
            edit_trigger: get_typed!(ids, SurfaceRole::EditTrigger, HtmlElement),
            save_trigger: get_typed!(ids, SurfaceRole::SaveTrigger, HtmlElement),
            name_input: get_field(ids, SurfaceRole::NameInput)?,
            bio_input: get_field(ids, SurfaceRole::BioInput)?,
            name_display: get_typed!(ids, SurfaceRole::NameDisplay, HtmlElement),
            bio_display: get_typed!(ids, SurfaceRole::BioDisplay, HtmlElement),
            picture_input: get_typed!(ids, SurfaceRole::PictureInput, HtmlInputElement),
            picture_preview: get_typed!(ids, SurfaceRole::PicturePreview, HtmlImageElement),
        })
    }

    pub fn surfaces(&self) -> Surfaces<DomKit> {
        Surfaces {
            edit_trigger: DomElement(self.edit_trigger.clone()),
            save_trigger: DomElement(self.save_trigger.clone()),
            name_input: self.name_input.clone(),
            bio_input: self.bio_input.clone(),
            name_display: DomElement(self.name_display.clone()),
            bio_display: DomElement(self.bio_display.clone()),
            picture_input: DomPicker(self.picture_input.clone()),
            picture_preview: DomImage(self.picture_preview.clone()),
        }
    }
}
