//! Picked files as composer input.

use middleframe::SelectedFile;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

/// A `File` from an `<input type="file">`.
#[derive(Debug, Clone)]
pub struct BrowserFile(pub File);

impl SelectedFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> Option<String> {
        Some(self.0.type_())
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, String> {
        let buffer = JsFuture::from(self.0.array_buffer())
            .await
            .map_err(|e| format!("{:?}", e))?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

/// Every file currently selected in `input`, in selection order.
pub fn selected_files(input: &HtmlInputElement) -> Vec<BrowserFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserFile)
        .collect()
}
