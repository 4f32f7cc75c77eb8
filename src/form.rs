use crate::constants::*;
use crate::cookies::{self, CookieCsrf};
use crate::dom::{self, input_by_id, js_err, listen, set_style};
use crate::events;
use crate::gateway;
use crate::http::FetchTransport;
use crate::notice;
use landing_core::{
    ErrorStyle, Field, FieldErrors, FieldState, FormFields, SubmitError, SubmitOutcome, Submitter,
    SurfaceConfig,
};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct Inputs {
    name: web::HtmlInputElement,
    email: web::HtmlInputElement,
    phone: web::HtmlInputElement,
}

impl Inputs {
    fn get(&self, field: Field) -> &web::HtmlInputElement {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    fn read(&self) -> FormFields {
        FormFields {
            name: self.name.value(),
            email: self.email.value(),
            phone: self.phone.value(),
        }
    }
}

/// One checkout form on the page, bound to its own submitter.
pub struct FormBinding {
    document: web::Document,
    inputs: Inputs,
    submit_button: Option<web::HtmlButtonElement>,
    idle_label: String,
    submitter: Submitter<FetchTransport, CookieCsrf>,
}

impl FormBinding {
    /// Bind `form` using `config` and wire live validation, the phone mask
    /// and submission.
    pub fn attach(
        document: &web::Document,
        form: web::HtmlFormElement,
        config: SurfaceConfig,
    ) -> anyhow::Result<Rc<Self>> {
        let input = |id: &str| {
            input_by_id(document, id).ok_or_else(|| anyhow::anyhow!("missing #{} input", id))
        };
        let inputs = Inputs {
            name: input(Field::Name.id())?,
            email: input(Field::Email.id())?,
            phone: input(Field::Phone.id())?,
        };
        let submit_button = form
            .query_selector(SUBMIT_BUTTON_SELECTOR)
            .map_err(js_err)?
            .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
        let idle_label = submit_button
            .as_ref()
            .and_then(|b| b.text_content())
            .unwrap_or_default();

        let surface = config.surface;
        let csrf = CookieCsrf {
            document: document.clone(),
        };
        let binding = Rc::new(Self {
            document: document.clone(),
            inputs,
            submit_button,
            idle_label,
            submitter: Submitter::new(config, FetchTransport, csrf),
        });

        for field in [Field::Name, Field::Email] {
            let b = binding.clone();
            listen(binding.inputs.get(field), "input", move |_: web::Event| {
                b.live_check(field);
            });
            let b = binding.clone();
            listen(binding.inputs.get(field), "blur", move |_: web::Event| {
                b.blur_check(field);
            });
        }

        let b = binding.clone();
        events::wire_phone_mask(&binding.inputs.phone, move |_| b.live_check(Field::Phone));
        let b = binding.clone();
        listen(&binding.inputs.phone, "blur", move |_: web::Event| {
            b.blur_check(Field::Phone);
        });

        let b = binding.clone();
        listen(&form, "submit", move |ev: web::Event| {
            ev.prevent_default();
            let b = b.clone();
            spawn_local(async move { b.submit().await });
        });

        log::info!("[form] {:?} form ready", surface);
        Ok(binding)
    }

    fn config(&self) -> &SurfaceConfig {
        self.submitter.config()
    }

    fn check(&self, field: Field) -> FieldState {
        self.config()
            .validator()
            .check(field, &self.inputs.get(field).value())
    }

    /// Update the valid/error marking while typing; messages already shown
    /// are cleared once the value becomes valid.
    fn live_check(&self, field: Field) {
        let state = self.check(field);
        self.mark(field, state.valid);
        if state.valid {
            self.clear_message(field);
        }
    }

    fn blur_check(&self, field: Field) {
        let input = self.inputs.get(field);
        if input.value().trim().is_empty() && field != Field::Phone {
            // untouched fields stay neutral until submit
            return;
        }
        let state = self.check(field);
        self.mark(field, state.valid);
        match state.error {
            Some(message) => self.show_message(field.id(), &message),
            None => self.clear_message(field),
        }
    }

    fn mark(&self, field: Field, valid: bool) {
        let classes = self.inputs.get(field).class_list();
        _ = classes.toggle_with_force(INPUT_ERROR_CLASS, !valid);
        _ = classes.toggle_with_force(INPUT_VALID_CLASS, valid);
    }

    fn show_message(&self, field_id: &str, message: &str) {
        let Some(input) = Field::from_id(field_id).map(|f| self.inputs.get(f)) else {
            log::warn!("[form] server error for unknown field {}: {}", field_id, message);
            return;
        };
        set_style(input, "border-color", ERROR_COLOR);
        match self.config().error_style {
            ErrorStyle::Container => {
                if let Some(el) = self
                    .document
                    .get_element_by_id(&error_container_id(field_id))
                    .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
                {
                    el.set_text_content(Some(message));
                    set_style(&el, "display", "block");
                    return;
                }
                self.append_message_node(input, field_id, message);
            }
            ErrorStyle::InlineNode => self.append_message_node(input, field_id, message),
        }
    }

    fn append_message_node(&self, input: &web::HtmlInputElement, field_id: &str, message: &str) {
        let Some(parent) = input.parent_node() else {
            return;
        };
        self.remove_message_node(field_id);
        let Ok(node) = dom::create_text(&self.document, "div", ERROR_MESSAGE_CLASS, message) else {
            return;
        };
        _ = node.set_attribute("data-field", field_id);
        _ = node.set_attribute("style", "color:red;font-size:12px;margin-top:5px");
        _ = parent.append_child(&node);
    }

    fn remove_message_node(&self, field_id: &str) {
        dom::remove_all(
            &self.document,
            &format!(".{ERROR_MESSAGE_CLASS}[data-field=\"{field_id}\"]"),
        );
    }

    fn clear_message(&self, field: Field) {
        let input = self.inputs.get(field);
        _ = input.style().remove_property("border-color");
        self.remove_message_node(field.id());
        if let Some(el) = self
            .document
            .get_element_by_id(&error_container_id(field.id()))
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            set_style(&el, "display", "none");
        }
    }

    fn show_errors(&self, errors: &FieldErrors) {
        for field in Field::ALL {
            let failed = errors.first(field.id()).is_some();
            self.mark(field, !failed);
            if !failed {
                self.clear_message(field);
            }
        }
        for (field_id, messages) in errors.iter() {
            if let Some(first) = messages.first() {
                self.show_message(field_id, first);
            }
        }
    }

    fn set_busy(&self, busy: bool) {
        if let Some(button) = &self.submit_button {
            button.set_disabled(busy);
            let label = if busy {
                self.config().busy_label.as_str()
            } else {
                self.idle_label.as_str()
            };
            button.set_text_content(Some(label));
        }
    }

    fn is_busy(&self) -> bool {
        self.submit_button
            .as_ref()
            .map(|b| b.disabled())
            .unwrap_or(false)
    }

    async fn submit(&self) {
        if self.is_busy() {
            return;
        }
        notice::hide(&self.document);
        let fields = self.inputs.read();
        let attribution = cookies::stored_utm(&self.document);

        self.set_busy(true);
        let result = self.submitter.submit(&fields, &attribution).await;

        match result {
            Ok(SubmitOutcome::Gateway(form)) => {
                if let Err(e) = gateway::post(&self.document, &form) {
                    log::error!("[form] gateway redirect failed: {:?}", e);
                    self.set_busy(false);
                    notice::show(&self.document, GENERIC_FAILURE_NOTICE);
                }
            }
            Ok(SubmitOutcome::SoldOut { url }) => {
                if let Err(e) = gateway::navigate(&url) {
                    log::error!("[form] sold-out redirect failed: {:?}", e);
                    self.set_busy(false);
                }
            }
            Ok(SubmitOutcome::Invalid(errors)) => {
                self.show_errors(&errors);
                self.set_busy(false);
            }
            Ok(SubmitOutcome::Rejected { errors, message }) => {
                self.show_errors(&errors);
                match message {
                    Some(message) => notice::show(&self.document, &message),
                    None if errors.is_empty() => {
                        notice::show(&self.document, GENERIC_FAILURE_NOTICE)
                    }
                    None => {}
                }
                self.set_busy(false);
            }
            Err(SubmitError::Busy) => {
                log::debug!("[form] submit ignored while a request is in flight");
            }
            Err(e) => {
                log::error!("[form] submission failed: {}", e);
                self.set_busy(false);
                notice::show(&self.document, GENERIC_FAILURE_NOTICE);
            }
        }
    }
}

/// Find the checkout form on the page and pick its surface preset.
pub fn find_form(document: &web::Document) -> Option<(web::HtmlFormElement, SurfaceConfig)> {
    let candidates = [
        (SUBSCRIPTION_FORM_SELECTOR, SurfaceConfig::subscription()),
        (TICKET_FORM_SELECTOR, SurfaceConfig::ticket()),
    ];
    candidates.into_iter().find_map(|(selector, config)| {
        document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
            .map(|form| (form, config))
    })
}
