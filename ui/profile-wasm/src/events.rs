//! Event binding.
//!
//! Wires the edit/save clicks and the picture `change` listener to the
//! installed editor. Picture reads run via `wasm_bindgen_futures::spawn_local`.

use crate::dom::Elements;
use crate::picture;
use crate::state;
use gloo_console as console;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Helper: attach a click handler to an HtmlElement.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after the editor is installed.
pub fn bind_events(els: &Elements) -> Result<(), JsValue> {
    on_click!(els.edit_trigger, move |_: web_sys::MouseEvent| on_edit());
    on_click!(els.save_trigger, move |_: web_sys::MouseEvent| on_save());

    let input = els.picture_input.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        on_picture_selected(&input);
    }) as Box<dyn FnMut(_)>);
    els.picture_input
        .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
    cb.forget();

    Ok(())
}

fn on_edit() {
    if let Some(Err(e)) = state::with_mut(|editor| editor.enter_edit_mode()) {
        console::warn!(e.to_string());
    }
}

fn on_save() {
    match state::with_mut(|editor| editor.save_changes()) {
        Some(Ok(profile)) => console::log!(format!("profile saved: {}", profile.name)),
        Some(Err(e)) => console::warn!(e.to_string()),
        None => {}
    }
}

/// Each selection starts its own read; earlier reads are not cancelled.
fn on_picture_selected(input: &web_sys::HtmlInputElement) {
    let files = picture::selected_files(input);
    let Some(previewer) = state::previewer() else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = previewer.preview_selected_image(&files).await {
            console::warn!(format!("picture preview skipped: {}", e));
        }
    });
}
