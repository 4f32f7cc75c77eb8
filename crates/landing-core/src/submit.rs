use crate::config::SurfaceConfig;
use crate::constants::CSRF_FIELD;
use crate::error::SubmitError;
use crate::gateway::{GatewayForm, GatewayParams};
use crate::utm::Attribution;
use crate::validate::{Field, FieldErrors, FormFields};
use serde::Deserialize;
use std::cell::Cell;

/// A multipart POST to the checkout endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    pub url: String,
    pub fields: Vec<(String, String)>,
    /// Echoed in the `X-CSRFToken` header as well as the body.
    pub csrf_token: Option<String>,
}

impl SubmitRequest {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    #[inline]
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends the checkout request. The browser implementation wraps `fetch`;
/// tests substitute a recorder.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_form(&self, request: &SubmitRequest) -> Result<TransportResponse, SubmitError>;
}

/// Supplies the anti-forgery token for each request.
pub trait CsrfSource {
    fn csrf_token(&self) -> Option<String>;
}

impl<F> CsrfSource for F
where
    F: Fn() -> Option<String>,
{
    fn csrf_token(&self) -> Option<String> {
        self()
    }
}

/// Checkout endpoint reply.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub wayforpay_params: Option<GatewayParams>,
    #[serde(default)]
    pub errors: Option<FieldErrors>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Where a finished submission leaves the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Post this form to the payment gateway; the page navigates away.
    Gateway(GatewayForm),
    /// The offering is sold out; navigate to `url`.
    SoldOut { url: String },
    /// Local validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The server refused the order.
    Rejected {
        errors: FieldErrors,
        message: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// Resets the phase when the in-flight request settles, whichever way.
struct InFlight<'a>(&'a Cell<SubmitPhase>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(SubmitPhase::Idle);
    }
}

/// Map a raw endpoint reply to an outcome.
pub fn interpret_response(
    response: &TransportResponse,
    gateway_url: &str,
) -> Result<SubmitOutcome, SubmitError> {
    let parsed = serde_json::from_str::<SubmitResponse>(&response.body);
    if !response.is_ok() {
        // form errors come back as 400 with the usual JSON body
        return match parsed {
            Ok(reply) if !reply.success && (reply.errors.is_some() || reply.message.is_some()) => {
                Ok(SubmitOutcome::Rejected {
                    errors: reply.errors.unwrap_or_default(),
                    message: reply.message,
                })
            }
            _ => Err(SubmitError::Status(response.status)),
        };
    }
    let reply = parsed?;

    if let Some(url) = reply.redirect_url.filter(|u| !u.is_empty()) {
        return Ok(SubmitOutcome::SoldOut { url });
    }
    if reply.success {
        return match reply.wayforpay_params {
            Some(params) if !params.is_empty() => {
                Ok(SubmitOutcome::Gateway(GatewayForm::build(gateway_url, &params)))
            }
            _ => Err(SubmitError::UnexpectedResponse),
        };
    }
    Ok(SubmitOutcome::Rejected {
        errors: reply.errors.unwrap_or_default(),
        message: reply.message,
    })
}

/// Validates, sends and interprets one form's checkout submissions.
pub struct Submitter<T, C> {
    config: SurfaceConfig,
    transport: T,
    csrf: C,
    phase: Cell<SubmitPhase>,
}

impl<T: Transport, C: CsrfSource> Submitter<T, C> {
    pub fn new(config: SurfaceConfig, transport: T, csrf: C) -> Self {
        Self {
            config,
            transport,
            csrf,
            phase: Cell::new(SubmitPhase::Idle),
        }
    }

    #[inline]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    #[inline]
    pub fn phase(&self) -> SubmitPhase {
        self.phase.get()
    }

    pub fn build_request(&self, fields: &FormFields, attribution: &Attribution) -> SubmitRequest {
        let csrf_token = self.csrf.csrf_token();
        let mut body: Vec<(String, String)> = Field::ALL
            .iter()
            .map(|&f| (f.id().to_string(), fields.get(f).trim().to_string()))
            .collect();
        body.push((
            CSRF_FIELD.to_string(),
            csrf_token.clone().unwrap_or_default(),
        ));
        body.extend(attribution.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        SubmitRequest {
            url: self.config.endpoint.clone(),
            fields: body,
            csrf_token,
        }
    }

    /// Run one submission. Invalid input never reaches the transport, and a
    /// second call while one is in flight is refused with `Busy`.
    pub async fn submit(
        &self,
        fields: &FormFields,
        attribution: &Attribution,
    ) -> Result<SubmitOutcome, SubmitError> {
        if self.phase.get() == SubmitPhase::Submitting {
            return Err(SubmitError::Busy);
        }

        let violations = self.config.validator().validate(fields);
        if !violations.is_empty() {
            log::info!("[submit] {} field(s) failed validation", violations.len());
            return Ok(SubmitOutcome::Invalid(violations.into()));
        }

        self.phase.set(SubmitPhase::Submitting);
        let _in_flight = InFlight(&self.phase);

        let request = self.build_request(fields, attribution);
        if request.csrf_token.is_none() {
            log::warn!("[submit] no CSRF token cookie; sending without one");
        }
        let response = self.transport.post_form(&request).await?;
        let outcome = interpret_response(&response, &self.config.gateway_url)?;
        match &outcome {
            SubmitOutcome::Gateway(form) => {
                log::info!("[submit] redirecting to gateway with {} field(s)", form.fields.len())
            }
            SubmitOutcome::SoldOut { url } => log::info!("[submit] sold out, redirecting to {url}"),
            SubmitOutcome::Rejected { errors, .. } => {
                log::info!("[submit] server rejected {} field(s)", errors.0.len())
            }
            SubmitOutcome::Invalid(_) => {}
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16, body: &str) -> TransportResponse {
        TransportResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn non_ok_status_is_an_error() {
        let r = interpret_response(&reply(502, "<html>"), "gw");
        assert!(matches!(r, Err(SubmitError::Status(502))));
    }

    #[test]
    fn bad_request_with_field_errors_is_rejected() {
        let r = interpret_response(
            &reply(
                400,
                r#"{"success":false,"errors":{"email":["Введіть коректну email адресу"]}}"#,
            ),
            "gw",
        )
        .unwrap();
        match r {
            SubmitOutcome::Rejected { errors, message } => {
                assert_eq!(errors.first("email"), Some("Введіть коректну email адресу"));
                assert_eq!(message, None);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn bad_request_without_details_is_a_status_error() {
        let r = interpret_response(&reply(400, r#"{"success":false}"#), "gw");
        assert!(matches!(r, Err(SubmitError::Status(400))));
        let r = interpret_response(&reply(403, "<h1>CSRF verification failed</h1>"), "gw");
        assert!(matches!(r, Err(SubmitError::Status(403))));
    }

    #[test]
    fn garbage_body_is_malformed() {
        let r = interpret_response(&reply(200, "not json"), "gw");
        assert!(matches!(r, Err(SubmitError::Malformed(_))));
    }

    #[test]
    fn redirect_url_means_sold_out() {
        let r = interpret_response(
            &reply(200, r#"{"success":false,"redirect_url":"/sold-out/"}"#),
            "gw",
        )
        .unwrap();
        assert_eq!(
            r,
            SubmitOutcome::SoldOut {
                url: "/sold-out/".into()
            }
        );
    }

    #[test]
    fn success_without_params_is_unexpected() {
        let r = interpret_response(&reply(200, r#"{"success":true}"#), "gw");
        assert!(matches!(r, Err(SubmitError::UnexpectedResponse)));
    }

    #[test]
    fn failure_carries_errors_and_message() {
        let r = interpret_response(
            &reply(
                200,
                r#"{"success":false,"errors":{"email":["Enter a valid email address."]}}"#,
            ),
            "gw",
        )
        .unwrap();
        match r {
            SubmitOutcome::Rejected { errors, message } => {
                assert_eq!(errors.first("email"), Some("Enter a valid email address."));
                assert_eq!(message, None);
            }
            other => panic!("unexpected outcome {other:?}"),
        }

        let r = interpret_response(
            &reply(200, r#"{"success":false,"message":"duplicate order"}"#),
            "gw",
        )
        .unwrap();
        assert_eq!(
            r,
            SubmitOutcome::Rejected {
                errors: FieldErrors::default(),
                message: Some("duplicate order".into()),
            }
        );
    }
}
