use landing_core::constants::{CSRF_COOKIE, UTM_COOKIE_DAYS};
use landing_core::cookies::{cookie_assignment, find_cookie};
use landing_core::utm::Attribution;
use landing_core::CsrfSource;
use wasm_bindgen::JsCast;
use web_sys as web;

fn html_document(document: &web::Document) -> Option<web::HtmlDocument> {
    document.dyn_ref::<web::HtmlDocument>().cloned()
}

/// Decoded value of cookie `name`, if set.
pub fn read(document: &web::Document, name: &str) -> Option<String> {
    let header = html_document(document)?.cookie().ok()?;
    let raw = find_cookie(&header, name)?;
    match js_sys::decode_uri_component(raw) {
        Ok(decoded) => Some(String::from(decoded)),
        Err(_) => Some(raw.to_string()),
    }
}

pub fn write(document: &web::Document, name: &str, value: &str, max_age_days: u32) {
    let Some(doc) = html_document(document) else {
        return;
    };
    let encoded = String::from(js_sys::encode_uri_component(value));
    if let Err(e) = doc.set_cookie(&cookie_assignment(name, &encoded, max_age_days)) {
        log::warn!("[cookies] could not set {}: {:?}", name, e);
    }
}

/// Remember UTM parameters from the current URL for later checkout.
pub fn capture_utm(window: &web::Window, document: &web::Document) {
    let Ok(search) = window.location().search() else {
        return;
    };
    if search.is_empty() {
        return;
    }
    let Ok(params) = web::UrlSearchParams::new_with_str(&search) else {
        return;
    };
    let attribution = Attribution::collect(|key| params.get(key));
    for (key, value) in attribution.iter() {
        write(document, key, value, UTM_COOKIE_DAYS);
    }
    if !attribution.is_empty() {
        log::info!("[utm] stored {} campaign parameter(s)", attribution.iter().count());
    }
}

/// Attribution stored by an earlier `capture_utm`.
pub fn stored_utm(document: &web::Document) -> Attribution {
    Attribution::collect(|key| read(document, key))
}

/// Reads the CSRF token cookie at request time.
pub struct CookieCsrf {
    pub document: web::Document,
}

impl CsrfSource for CookieCsrf {
    fn csrf_token(&self) -> Option<String> {
        read(&self.document, CSRF_COOKIE)
    }
}
