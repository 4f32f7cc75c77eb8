/// DOM hooks and presentation constants shared by the web bindings.
///
/// Element ids and classes are the integration surface with the page markup;
/// renaming any of them needs a matching template change.
// Carousel mount point and optional opening-slide override
pub const CAROUSEL_ROOT_ID: &str = "carousel-root";
pub const INITIAL_SLIDE_ATTR: &str = "data-initial-slide";

// Carousel classes
pub const CAROUSEL_CLASS: &str = "schedule-carousel";
pub const VIEWPORT_CLASS: &str = "schedule-carousel__viewport";
pub const OVERFLOW_CLASS: &str = "schedule-carousel__overflow";
pub const TRACK_CLASS: &str = "schedule-carousel__track";
pub const SLIDE_CLASS: &str = "schedule-carousel__slide";
pub const CARD_CLASS: &str = "schedule-card";
pub const NAV_PREV_CLASS: &str = "schedule-carousel__nav schedule-carousel__nav--prev";
pub const NAV_NEXT_CLASS: &str = "schedule-carousel__nav schedule-carousel__nav--next";
pub const DOTS_CLASS: &str = "schedule-carousel__dots";
pub const DOT_CLASS: &str = "schedule-carousel__dot";
pub const DOT_ACTIVE_CLASS: &str = "is-active";
pub const CTA_CLASS: &str = "cta-button cta-button--primary month-schedule-btn";
pub const HEART_ICON_SRC: &str = "static/images/btn-heart-1.png";
pub const HEART_ICON_PX: u32 = 42;

// Inline layout the track relies on regardless of stylesheet
pub const TRACK_STYLE: &str = "display:flex";
pub const SLIDE_STYLE: &str = "width:100%;flex-shrink:0";
pub const OVERFLOW_STYLE: &str = "overflow:hidden";

// Dot geometry (px)
pub const DOT_WIDTH_PX: u32 = 8;
pub const DOT_ACTIVE_WIDTH_PX: u32 = 32;

// Forms
pub const TICKET_FORM_SELECTOR: &str = ".ticket-form";
pub const SUBSCRIPTION_FORM_SELECTOR: &str = ".subscription-form";
pub const SUBMIT_BUTTON_SELECTOR: &str = ".submit-button, button[type=submit]";
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
pub const ERROR_CONTAINER_SUFFIX: &str = "-error";
pub const INPUT_ERROR_CLASS: &str = "input-error";
pub const INPUT_VALID_CLASS: &str = "input-valid";
pub const ERROR_COLOR: &str = "#ff4757";

// Notices
pub const NOTICE_ID: &str = "form-notice";
pub const NOTICE_HIDDEN_CLASS: &str = "hidden";
pub const GENERIC_FAILURE_NOTICE: &str = "Виникла помилка. Спробуйте ще раз.";

#[inline]
pub fn error_container_id(field_id: &str) -> String {
    format!("{field_id}{ERROR_CONTAINER_SUFFIX}")
}
