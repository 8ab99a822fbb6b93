//! Small DOM helpers. Every lookup is optional: a page missing an element
//! simply skips that update.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement, HtmlElement, HtmlImageElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn html_element(id: &str) -> Option<HtmlElement> {
    document()?.get_element_by_id(id)?.dyn_into().ok()
}

/// Text content of an element, e.g. an embedded JSON `<script>`.
pub fn element_text(id: &str) -> Option<String> {
    document()?.get_element_by_id(id)?.text_content()
}

pub fn set_text(id: &str, text: &str) {
    if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
        el.set_text_content(Some(text));
    }
}

pub fn set_display(id: &str, value: &str) {
    if let Some(el) = html_element(id) {
        let _ = el.style().set_property("display", value);
    }
}

pub fn set_body_overflow(value: &str) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn set_image_src(id: &str, src: &str) {
    if let Some(img) = document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    {
        img.set_src(src);
    }
}

/// Resolved `src` of every `<img>` matching `selector`, in document order.
pub fn image_srcs(selector: &str) -> Vec<String> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlImageElement>().ok())
        .map(|img| img.src())
        .collect()
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window()
        && let Err(e) = window.alert_with_message(message)
    {
        log::warn!("alert failed: {e:?}");
    }
}

/// Show `id` and fill it with `text`.
pub fn show_info(id: &str, text: &str) {
    set_display(id, "block");
    set_text(id, text);
}

/// Start a browser download through a temporary `<a download>`.
pub fn trigger_download(href: &str, filename: &str) -> bool {
    let Some(document) = document() else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Some(link) = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
    else {
        return false;
    };
    link.set_href(href);
    link.set_download(filename);
    if body.append_child(&link).is_err() {
        return false;
    }
    link.click();
    let _ = body.remove_child(&link);
    true
}
