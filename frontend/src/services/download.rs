//! Image downloads.

use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, Url};

/// Fetch `url` and save it as `filename`.
///
/// Falls back to opening the image in a new tab when the fetch or the
/// object URL fails (cross-origin images without CORS headers).
pub async fn download_image(url: &str, filename: &str) {
    if let Err(e) = save_via_blob(url, filename).await {
        log::warn!("Download failed, opening in a new tab: {}", e);
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
}

async fn save_via_blob(url: &str, filename: &str) -> Result<(), String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let buffer = response.binary().await.map_err(|e| e.to_string())?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(buffer.as_slice()));
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(|e| format!("{:?}", e))?;
    let blob_url = Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let body = document.body().ok_or("no body")?;
    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into()
        .map_err(|_| "not an anchor".to_string())?;

    link.set_href(&blob_url);
    link.set_download(filename);
    body.append_child(&link).map_err(|e| format!("{:?}", e))?;
    link.click();
    let _ = body.remove_child(&link);
    let _ = Url::revoke_object_url(&blob_url);

    log::info!("Downloaded {}", filename);
    Ok(())
}
