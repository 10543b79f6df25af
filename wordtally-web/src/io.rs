//! Browser-based I/O using Web APIs

use wasm_bindgen::prelude::*;
use web_sys::{Blob, HtmlAnchorElement, Url};

use wordtally_core::Theme;

const THEME_KEY: &str = "theme";

/// Download text as a plain-text file
pub fn download_text(filename: &str, text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    // Create a blob from the text content
    let blob_parts = js_sys::Array::new();
    blob_parts.push(&JsValue::from_str(text));

    let blob_options = web_sys::BlobPropertyBag::new();
    blob_options.set_type("text/plain");

    let blob = Blob::new_with_str_sequence_and_options(&blob_parts, &blob_options)?;

    // Create an object URL for the blob
    let url = Url::create_object_url_with_blob(&blob)?;

    // Create a temporary anchor element and trigger download
    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    // Clean up the object URL
    Url::revoke_object_url(&url)?;

    Ok(())
}

/// Save the theme preference to localStorage
pub fn save_theme(theme: Theme) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let storage = window.local_storage()?.ok_or("No localStorage")?;

    storage.set_item(THEME_KEY, theme.as_str())?;

    Ok(())
}

/// Load the theme preference from localStorage, if one was saved
pub fn load_theme() -> Result<Option<Theme>, JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let storage = window.local_storage()?.ok_or("No localStorage")?;

    Ok(storage
        .get_item(THEME_KEY)?
        .and_then(|value| value.parse().ok()))
}
