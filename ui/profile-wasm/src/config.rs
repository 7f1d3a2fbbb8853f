//! Editor configuration.
//!
//! Read from an optional `<script type="application/json" id="profileEditorConfig">`
//! block. Missing block means defaults; a malformed one is reported and
//! also falls back to defaults.

use crate::dom;
use gloo_console as console;
use pe_types::EditorConfig;

pub const CONFIG_ELEMENT_ID: &str = "profileEditorConfig";

pub fn load_config() -> EditorConfig {
    let Some(raw) = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return EditorConfig::default();
    };
    if raw.trim().is_empty() {
        return EditorConfig::default();
    }
    match EditorConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            console::warn!(format!("ignoring #{}: {}", CONFIG_ELEMENT_ID, e));
            EditorConfig::default()
        }
    }
}
