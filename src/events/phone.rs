use crate::dom::listen;
use landing_core::phone::{clamp_caret, delete_backward, format_phone, on_focus, DeleteAction};
use std::rc::Rc;
use web_sys as web;

fn caret(input: &web::HtmlInputElement) -> Option<(u32, u32)> {
    let start = input.selection_start().ok().flatten()?;
    let end = input.selection_end().ok().flatten().unwrap_or(start);
    Some((start, end))
}

fn keep_caret_after_prefix(input: &web::HtmlInputElement) {
    if let Some((start, end)) = caret(input) {
        let min = clamp_caret(0) as u32;
        if start < min {
            _ = input.set_selection_range(min, end.max(min));
        }
    }
}

/// Attach the `+38(0XX)XXX-XX-XX` mask to `input`. `on_change` sees every
/// value the mask writes back.
pub fn wire_phone_mask(input: &web::HtmlInputElement, on_change: impl Fn(&str) + 'static) {
    let on_change = Rc::new(on_change);

    let el = input.clone();
    listen(input, "focus", move |_: web::Event| {
        let value = on_focus(&el.value());
        if value != el.value() {
            el.set_value(&value);
        }
        keep_caret_after_prefix(&el);
    });

    for event in ["click", "keyup"] {
        let el = input.clone();
        listen(input, event, move |_: web::Event| keep_caret_after_prefix(&el));
    }

    let el = input.clone();
    let notify = on_change.clone();
    listen(input, "input", move |_: web::Event| {
        let formatted = format_phone(&el.value());
        el.set_value(&formatted);
        notify(&formatted);
    });

    let el = input.clone();
    listen(input, "keydown", move |ev: web::KeyboardEvent| {
        let key = ev.key();
        if key != "Backspace" && key != "Delete" {
            return;
        }
        let Some((start, end)) = caret(&el) else {
            return;
        };
        if start != end {
            // ranged deletes go through the input event and get reformatted
            return;
        }
        match delete_backward(&el.value(), start as usize) {
            DeleteAction::Block => ev.prevent_default(),
            DeleteAction::Replace { value, caret } => {
                ev.prevent_default();
                el.set_value(&value);
                _ = el.set_selection_range(caret as u32, caret as u32);
                on_change(&value);
            }
            DeleteAction::Default => {}
        }
    });
}
