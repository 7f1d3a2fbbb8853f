//! Browser file selection.
//!
//! Wraps `web_sys::File` as a [`PictureFile`] whose contents are read through
//! the `Blob.arrayBuffer()` promise.

use async_trait::async_trait;
use pe_preview::{PictureFile, PreviewError};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

pub struct SelectedFile(pub File);

#[async_trait(?Send)]
impl PictureFile for SelectedFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, PreviewError> {
        let buffer = JsFuture::from(self.0.array_buffer())
            .await
            .map_err(|e| PreviewError::ReadFailed(format!("{:?}", e)))?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

/// Snapshot the input's current file list. Empty when nothing is selected.
pub fn selected_files(input: &HtmlInputElement) -> Vec<SelectedFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(SelectedFile)
        .collect()
}
