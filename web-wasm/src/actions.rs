//! Post-success actions on the generated URL
//!
//! Copy, open and save never feed back into the workflow state; they only
//! consume the already-generated URL string.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, HtmlTextAreaElement, Url};

fn document() -> Result<Document, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document unavailable".to_string())
}

/// Copy `text` via the async Clipboard API, falling back to the legacy
/// hidden-textarea path when the secure clipboard is rejected.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let clipboard = window.navigator().clipboard();
    match JsFuture::from(clipboard.write_text(text)).await {
        Ok(_) => Ok(()),
        Err(_) => legacy_copy(text),
    }
}

fn legacy_copy(text: &str) -> Result<(), String> {
    let document = document()?;
    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|e| format!("failed to create textarea: {e:?}"))?
        .dyn_into()
        .map_err(|_| "unexpected element type".to_string())?;
    textarea.set_value(text);
    // Keep the helper element out of view without scrolling the page
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("top", "-9999px");
    let _ = style.set_property("left", "-9999px");

    let body = document.body().ok_or_else(|| "body unavailable".to_string())?;
    body.append_child(&textarea)
        .map_err(|e| format!("failed to attach textarea: {e:?}"))?;
    let _ = textarea.focus();
    textarea.select();
    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|d| d.exec_command("copy").ok())
        .unwrap_or(false);
    let _ = body.remove_child(&textarea);

    if copied {
        Ok(())
    } else {
        Err("the browser refused the copy; copy the link manually".to_string())
    }
}

/// Open the URL in a new tab
pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let opened = window
        .open_with_url_and_target(url, "_blank")
        .map_err(|e| format!("failed to open tab: {e:?}"))?;
    if opened.is_none() {
        return Err("the browser blocked the new tab".to_string());
    }
    Ok(())
}

/// Hand the fetched configuration to the browser as a file download
pub fn save_config_file(bytes: &[u8], filename: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type("text/yaml");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("failed to build blob: {e:?}"))?;
    let object_url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("failed to create object URL: {e:?}"))?;

    let document = document()?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("failed to create anchor: {e:?}"))?
        .dyn_into()
        .map_err(|_| "unexpected element type".to_string())?;
    anchor.set_href(&object_url);
    anchor.set_download(filename);

    let body = document.body().ok_or_else(|| "body unavailable".to_string())?;
    body.append_child(&anchor)
        .map_err(|e| format!("failed to attach anchor: {e:?}"))?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = Url::revoke_object_url(&object_url);
    Ok(())
}
