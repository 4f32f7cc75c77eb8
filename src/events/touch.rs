use crate::carousel::CarouselView;
use crate::dom::listen;
use std::rc::Rc;
use web_sys as web;

/// X of the first finger in `touches`, in CSS pixels.
#[inline]
fn first_touch_x(touches: &web::TouchList) -> Option<f64> {
    touches.get(0).map(|t| f64::from(t.client_x()))
}

/// Swipe left/right on `target` to move the carousel. Only the first touch
/// point is tracked.
pub fn wire_swipe(target: &web::HtmlElement, view: Rc<CarouselView>) {
    let v = view.clone();
    listen(target, "touchstart", move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev.touches()) {
            v.swipe_begin(x);
        }
    });

    let v = view.clone();
    listen(target, "touchmove", move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev.touches()) {
            v.swipe_update(x);
        }
    });

    let v = view.clone();
    listen(target, "touchend", move |ev: web::TouchEvent| {
        // lifted finger is only reported in changedTouches
        if let Some(x) = first_touch_x(&ev.changed_touches()) {
            v.swipe_update(x);
        }
        v.swipe_end();
    });

    listen(target, "touchcancel", move |_: web::TouchEvent| {
        view.swipe_cancel();
    });
}
