use crate::constants::{
    BUSY_LABEL, GATEWAY_URL, SUBMIT_ENDPOINT, SUBSCRIPTION_NAME_MIN_CHARS, SWIPE_THRESHOLD_PX,
    TICKET_NAME_MIN_CHARS,
};
use crate::validate::Validator;

/// Which landing form the page carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    /// Event ticket form (`.ticket-form`), desktop and mobile pages.
    Ticket,
    /// Monthly subscription form (`.subscription-form`).
    Subscription,
}

/// How field errors are put on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorStyle {
    /// A fresh `.error-message` node appended next to the input.
    InlineNode,
    /// A pre-rendered `#<field>-error` container shown and filled in.
    Container,
}

/// Per-surface options. Everything the page variants disagree on lives here
/// instead of in parallel copies of the handlers.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceConfig {
    pub surface: Surface,
    pub name_min_chars: usize,
    pub swipe_threshold_px: f64,
    pub endpoint: String,
    pub gateway_url: String,
    pub busy_label: String,
    pub error_style: ErrorStyle,
}

impl SurfaceConfig {
    pub fn ticket() -> Self {
        Self {
            surface: Surface::Ticket,
            name_min_chars: TICKET_NAME_MIN_CHARS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            endpoint: SUBMIT_ENDPOINT.to_string(),
            gateway_url: GATEWAY_URL.to_string(),
            busy_label: BUSY_LABEL.to_string(),
            error_style: ErrorStyle::InlineNode,
        }
    }

    pub fn subscription() -> Self {
        Self {
            surface: Surface::Subscription,
            name_min_chars: SUBSCRIPTION_NAME_MIN_CHARS,
            error_style: ErrorStyle::Container,
            ..Self::ticket()
        }
    }

    #[inline]
    pub fn validator(&self) -> Validator {
        Validator::new(self.name_min_chars)
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::ticket()
    }
}
