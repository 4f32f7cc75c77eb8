use landing_core::constants::CSRF_HEADER;
use landing_core::{SubmitError, SubmitRequest, Transport, TransportResponse};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn transport_err(e: JsValue) -> SubmitError {
    SubmitError::Transport(format!("{:?}", e))
}

/// `fetch`-backed transport posting multipart form data with the session
/// cookies attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl FetchTransport {
    fn build(request: &SubmitRequest) -> Result<web::Request, JsValue> {
        let body = web::FormData::new()?;
        for (name, value) in &request.fields {
            body.append_with_str(name, value)?;
        }

        let headers = web::Headers::new()?;
        if let Some(token) = &request.csrf_token {
            headers.set(CSRF_HEADER, token)?;
        }

        let init = web::RequestInit::new();
        init.set_method("POST");
        init.set_body(&body);
        init.set_headers(&headers);
        init.set_credentials(web::RequestCredentials::Include);
        web::Request::new_with_str_and_init(&request.url, &init)
    }
}

impl Transport for FetchTransport {
    async fn post_form(&self, request: &SubmitRequest) -> Result<TransportResponse, SubmitError> {
        let window = web::window().ok_or_else(|| SubmitError::Transport("no window".into()))?;
        let req = Self::build(request).map_err(transport_err)?;

        let value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(transport_err)?;
        let response: web::Response = value.dyn_into().map_err(transport_err)?;
        let status = response.status();

        let text = JsFuture::from(response.text().map_err(transport_err)?)
            .await
            .map_err(transport_err)?;
        Ok(TransportResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}
