use crate::constants::{NOTICE_HIDDEN_CLASS, NOTICE_ID};
use web_sys as web;

/// Show a form-level message. Pages without a `#form-notice` element fall
/// back to a blocking alert.
pub fn show(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(NOTICE_ID) {
        el.set_text_content(Some(text));
        _ = el.class_list().remove_1(NOTICE_HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
        return;
    }
    if let Some(window) = web::window() {
        _ = window.alert_with_message(text);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(NOTICE_ID) {
        _ = el.class_list().add_1(NOTICE_HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}
