//! Global editor state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Event callbacks reach the controller through these accessors.

use crate::dom::{DomImage, DomKit};
use pe_editor_core::{PicturePreviewer, ProfileEditor};
use std::cell::RefCell;

thread_local! {
    static EDITOR: RefCell<Option<ProfileEditor<DomKit>>> = const { RefCell::new(None) };
}

pub fn install(editor: ProfileEditor<DomKit>) {
    EDITOR.with(|e| *e.borrow_mut() = Some(editor));
}

/// Run a closure with shared read access to the editor, if installed.
pub fn with<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&ProfileEditor<DomKit>) -> R,
{
    EDITOR.with(|e| e.borrow().as_ref().map(f))
}

/// Run a closure with mutable access to the editor, if installed.
pub fn with_mut<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut ProfileEditor<DomKit>) -> R,
{
    EDITOR.with(|e| e.borrow_mut().as_mut().map(f))
}

pub fn previewer() -> Option<PicturePreviewer<DomImage>> {
    with(|editor| editor.previewer())
}
