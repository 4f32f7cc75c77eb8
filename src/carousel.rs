use crate::constants::*;
use crate::dom::{self, create, create_text, js_err, set_style};
use landing_core::{track_transition, Carousel, Slide, SwipeDirection, SwipeTracker, SLIDE_CTA_HREF, SLIDE_CTA_LABEL};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Mounted schedule carousel: owns the selection state and the nodes that
/// reflect it.
pub struct CarouselView {
    state: RefCell<Carousel>,
    swipe: RefCell<SwipeTracker>,
    track: web::HtmlElement,
    dots: Vec<web::HtmlElement>,
}

impl CarouselView {
    /// Render `slides` into `root` (replacing its children) and wire the
    /// navigation controls.
    pub fn mount(
        document: &web::Document,
        root: &web::Element,
        slides: &'static [Slide],
        start: usize,
        swipe_threshold_px: f64,
    ) -> anyhow::Result<Rc<Self>> {
        let state = Carousel::new(slides.len(), start)?;

        let container = create(document, "div", CAROUSEL_CLASS)?;
        let viewport = create(document, "div", VIEWPORT_CLASS)?;
        let overflow = create(document, "div", OVERFLOW_CLASS)?;
        _ = overflow.set_attribute("style", OVERFLOW_STYLE);
        let track = create(document, "div", TRACK_CLASS)?;
        _ = track.set_attribute("style", TRACK_STYLE);
        set_style(&track, "transition", &track_transition());

        for slide in slides {
            track.append_child(&render_slide(document, slide)?).map_err(js_err)?;
        }
        overflow.append_child(&track).map_err(js_err)?;
        viewport.append_child(&overflow).map_err(js_err)?;

        let prev = create_text(document, "button", NAV_PREV_CLASS, "‹")?;
        _ = prev.set_attribute("type", "button");
        _ = prev.set_attribute("aria-label", "Попередній місяць");
        let next = create_text(document, "button", NAV_NEXT_CLASS, "›")?;
        _ = next.set_attribute("type", "button");
        _ = next.set_attribute("aria-label", "Наступний місяць");
        viewport.append_child(&prev).map_err(js_err)?;
        viewport.append_child(&next).map_err(js_err)?;

        let dots_row = create(document, "div", DOTS_CLASS)?;
        let mut dots = Vec::with_capacity(slides.len());
        for slide in slides {
            let dot = create(document, "button", DOT_CLASS)?;
            _ = dot.set_attribute("type", "button");
            _ = dot.set_attribute("aria-label", slide.month);
            dots_row.append_child(&dot).map_err(js_err)?;
            dots.push(dot);
        }

        container.append_child(&viewport).map_err(js_err)?;
        container.append_child(&dots_row).map_err(js_err)?;
        root.set_inner_html("");
        root.append_child(&container).map_err(js_err)?;

        let view = Rc::new(Self {
            state: RefCell::new(state),
            swipe: RefCell::new(SwipeTracker::new(swipe_threshold_px)),
            track,
            dots,
        });
        view.render();

        let v = view.clone();
        dom::add_click_listener(&prev, move || v.prev());
        let v = view.clone();
        dom::add_click_listener(&next, move || v.next());
        for (i, dot) in view.dots.iter().enumerate() {
            let v = view.clone();
            dom::add_click_listener(dot, move || v.goto(i));
        }
        crate::events::wire_swipe(&overflow, view.clone());

        log::info!(
            "[carousel] mounted {} slide(s), showing {}",
            slides.len(),
            slides[state.index()].month
        );
        Ok(view)
    }

    pub fn next(&self) {
        self.state.borrow_mut().next();
        self.render();
    }

    pub fn prev(&self) {
        self.state.borrow_mut().prev();
        self.render();
    }

    pub fn goto(&self, i: usize) {
        if self.state.borrow_mut().goto(i) {
            self.render();
        }
    }

    pub fn swipe_begin(&self, x: f64) {
        self.swipe.borrow_mut().begin(x);
    }

    pub fn swipe_update(&self, x: f64) {
        self.swipe.borrow_mut().update(x);
    }

    pub fn swipe_cancel(&self) {
        self.swipe.borrow_mut().cancel();
    }

    pub fn swipe_end(&self) {
        let direction = self.swipe.borrow_mut().end();
        match direction {
            Some(SwipeDirection::Next) => self.next(),
            Some(SwipeDirection::Prev) => self.prev(),
            None => {}
        }
    }

    fn render(&self) {
        let state = *self.state.borrow();
        set_style(&self.track, "transform", &state.track_transform());
        for (i, dot) in self.dots.iter().enumerate() {
            let active = state.is_active(i);
            let width = if active { DOT_ACTIVE_WIDTH_PX } else { DOT_WIDTH_PX };
            set_style(dot, "width", &format!("{width}px"));
            _ = dot.class_list().toggle_with_force(DOT_ACTIVE_CLASS, active);
            _ = dot.set_attribute("aria-current", if active { "true" } else { "false" });
        }
    }
}

fn render_slide(document: &web::Document, slide: &Slide) -> anyhow::Result<web::HtmlElement> {
    let wrapper = create(document, "div", SLIDE_CLASS)?;
    _ = wrapper.set_attribute("style", SLIDE_STYLE);
    let card = create(document, "div", CARD_CLASS)?;

    card.append_child(&create_text(document, "p", "schedule-card__subtitle", slide.subtitle)?)
        .map_err(js_err)?;
    card.append_child(&create_text(document, "h2", "schedule-card__title", slide.title)?)
        .map_err(js_err)?;
    card.append_child(&create_text(document, "p", "schedule-card__tagline", slide.tagline)?)
        .map_err(js_err)?;

    let list = create(document, "ul", "schedule-card__list")?;
    for item in slide.items {
        let li = create(document, "li", "schedule-card__item")?;
        let icon = create(document, "img", "schedule-card__icon")?;
        _ = icon.set_attribute("src", HEART_ICON_SRC);
        _ = icon.set_attribute("width", &HEART_ICON_PX.to_string());
        _ = icon.set_attribute("height", &HEART_ICON_PX.to_string());
        _ = icon.set_attribute("alt", "");
        li.append_child(&icon).map_err(js_err)?;
        li.append_child(&create_text(document, "span", "schedule-card__text", item)?)
            .map_err(js_err)?;
        list.append_child(&li).map_err(js_err)?;
    }
    card.append_child(&list).map_err(js_err)?;

    let bonus = create(document, "div", "schedule-card__bonus")?;
    bonus
        .append_child(&create_text(document, "p", "schedule-card__bonus-label", slide.bonus.label)?)
        .map_err(js_err)?;
    bonus
        .append_child(&create_text(document, "p", "schedule-card__bonus-text", slide.bonus.text)?)
        .map_err(js_err)?;
    card.append_child(&bonus).map_err(js_err)?;

    let cta = create(document, "a", CTA_CLASS)?;
    _ = cta.set_attribute("href", SLIDE_CTA_HREF);
    cta.append_child(&create_text(document, "span", "", SLIDE_CTA_LABEL)?)
        .map_err(js_err)?;
    card.append_child(&cta).map_err(js_err)?;

    wrapper.append_child(&card).map_err(js_err)?;
    Ok(wrapper)
}
