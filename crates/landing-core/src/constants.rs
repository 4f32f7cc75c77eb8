// Shared tuning constants used by the core and the web front-end.

// Carousel
pub const SLIDE_TRANSITION_MS: u32 = 500;
pub const SWIPE_THRESHOLD_PX: f64 = 50.0; // minimum horizontal travel for a swipe

// Name field minimum length per surface
pub const TICKET_NAME_MIN_CHARS: usize = 1;
pub const SUBSCRIPTION_NAME_MIN_CHARS: usize = 2;

// Phone mask: +38(0XX)XXX-XX-XX
pub const PHONE_PREFIX: &str = "+38";
pub const PHONE_COUNTRY_DIGITS: &str = "38";
pub const PHONE_NATIONAL_TRUNK: char = '0';
pub const PHONE_SUBSCRIBER_DIGITS: usize = 9;
pub const PHONE_MASK_MAX_LEN: usize = 17;

// Checkout
pub const SUBMIT_ENDPOINT: &str = "/submit-ticket/";
pub const GATEWAY_URL: &str = "https://secure.wayforpay.com/pay";
pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const BUSY_LABEL: &str = "Обробка...";

// Campaign attribution cookies
pub const UTM_KEYS: [&str; 5] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
];
pub const UTM_COOKIE_DAYS: u32 = 30;
