#![cfg(target_arch = "wasm32")]
use landing_core::{initial_slide, SurfaceConfig, SCHEDULE};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod carousel;
mod constants;
mod cookies;
mod dom;
mod events;
mod form;
mod gateway;
mod http;
mod notice;

use constants::{CAROUSEL_ROOT_ID, INITIAL_SLIDE_ATTR};

fn mount_carousel(
    document: &web::Document,
    config: &SurfaceConfig,
) -> anyhow::Result<Option<Rc<carousel::CarouselView>>> {
    let Some(root) = document.get_element_by_id(CAROUSEL_ROOT_ID) else {
        return Ok(None);
    };
    let override_index = root
        .get_attribute(INITIAL_SLIDE_ATTR)
        .and_then(|v| v.trim().parse::<usize>().ok());
    let month0 = js_sys::Date::new_0().get_month();
    let start = initial_slide(override_index, month0, SCHEDULE.len());
    let view = carousel::CarouselView::mount(
        document,
        &root,
        SCHEDULE,
        start,
        config.swipe_threshold_px,
    )?;
    Ok(Some(view))
}

// Components stay alive through the listeners that captured them.
fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    cookies::capture_utm(&window, &document);

    let found = form::find_form(&document);
    let config = found
        .as_ref()
        .map(|(_, c)| c.clone())
        .unwrap_or_default();

    let carousel = match mount_carousel(&document, &config) {
        Ok(c) => c,
        Err(e) => {
            log::error!("[carousel] mount failed: {:?}", e);
            None
        }
    };

    let form = match found {
        Some((el, config)) => match form::FormBinding::attach(&document, el, config) {
            Ok(b) => Some(b),
            Err(e) => {
                log::error!("[form] attach failed: {:?}", e);
                None
            }
        },
        None => None,
    };

    log::info!(
        "landing-web ready (carousel: {}, form: {})",
        carousel.is_some(),
        form.is_some()
    );
    Ok(())
}

fn run() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-web starting");

    let loading = dom::window_document()
        .map(|d| d.ready_state() == "loading")
        .unwrap_or(false);
    if loading {
        if let Some(document) = dom::window_document() {
            let mut once = Some(());
            dom::listen(&document, "DOMContentLoaded", move |_: web::Event| {
                if once.take().is_some() {
                    run();
                }
            });
            return Ok(());
        }
    }
    run();
    Ok(())
}
