//! Profile editor WASM frontend.
//!
//! Binds the profile page's display/edit surfaces to the editor controller
//! and previews a selected picture as a data URI before upload.

pub mod config;
pub mod dom;
pub mod events;
pub mod picture;
pub mod state;

use pe_editor_core::ProfileEditor;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

fn init() -> Result<(), JsValue> {
    let config = config::load_config();
    let els = dom::Elements::bind(&config.element_ids)?;

    state::install(ProfileEditor::new(els.surfaces(), &config));
    events::bind_events(&els)?;

    Ok(())
}

/// Current `{ name, bio }` as shown on the page.
#[wasm_bindgen(js_name = currentProfile)]
pub fn current_profile() -> Result<JsValue, JsValue> {
    let profile = state::with(|editor| editor.profile())
        .ok_or_else(|| JsValue::from_str("profile editor not initialised"))?;
    serde_wasm_bindgen::to_value(&profile).map_err(JsValue::from)
}

/// `"display"` or `"edit"`.
#[wasm_bindgen(js_name = editorMode)]
pub fn editor_mode() -> Option<String> {
    state::with(|editor| editor.mode().to_string())
}
