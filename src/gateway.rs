use crate::dom::js_err;
use landing_core::GatewayForm;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Append a hidden form mirroring `form` to the body and submit it. On
/// success the browser leaves the page.
pub fn post(document: &web::Document, form: &GatewayForm) -> anyhow::Result<()> {
    let el = document
        .create_element("form")
        .map_err(js_err)?
        .dyn_into::<web::HtmlFormElement>()
        .map_err(|e| anyhow::anyhow!("<form> is not an HtmlFormElement: {:?}", e))?;
    el.set_method(form.method);
    el.set_action(&form.action);
    _ = el.set_attribute("style", "display:none");

    for field in &form.fields {
        let input = document
            .create_element("input")
            .map_err(js_err)?
            .dyn_into::<web::HtmlInputElement>()
            .map_err(|e| anyhow::anyhow!("<input> is not an HtmlInputElement: {:?}", e))?;
        input.set_type("hidden");
        input.set_name(&field.name);
        input.set_value(&field.value);
        el.append_child(&input).map_err(js_err)?;
    }

    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    body.append_child(&el).map_err(js_err)?;
    log::info!("[gateway] posting {} field(s) to {}", form.fields.len(), form.action);
    el.submit().map_err(js_err)
}

/// Full-page navigation, used for the sold-out redirect.
pub fn navigate(url: &str) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    window.location().set_href(url).map_err(js_err)
}
