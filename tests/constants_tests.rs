// Host-side tests for the DOM hook constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn form_hooks_match_template_ids() {
    assert_eq!(error_container_id("name"), "name-error");
    assert_eq!(error_container_id("phone"), "phone-error");
    assert!(TICKET_FORM_SELECTOR.starts_with('.'));
    assert!(SUBSCRIPTION_FORM_SELECTOR.starts_with('.'));
    assert!(SUBMIT_BUTTON_SELECTOR.contains(".submit-button"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn active_dot_is_wider_than_idle() {
    assert!(DOT_ACTIVE_WIDTH_PX > DOT_WIDTH_PX);
    assert!(DOT_WIDTH_PX > 0);
    assert!(HEART_ICON_PX > 0);
}

#[test]
fn track_layout_keeps_slides_in_one_row() {
    assert!(TRACK_STYLE.contains("display:flex"));
    assert!(SLIDE_STYLE.contains("width:100%"));
    assert!(SLIDE_STYLE.contains("flex-shrink:0"));
    assert!(OVERFLOW_STYLE.contains("overflow:hidden"));
}

#[test]
fn nav_classes_share_the_base_class() {
    for class in [NAV_PREV_CLASS, NAV_NEXT_CLASS] {
        assert!(class.split_whitespace().any(|c| c == "schedule-carousel__nav"));
    }
    assert_ne!(NAV_PREV_CLASS, NAV_NEXT_CLASS);
}

#[test]
fn notice_text_is_not_empty() {
    assert!(!GENERIC_FAILURE_NOTICE.trim().is_empty());
    assert!(!NOTICE_ID.is_empty());
}
