use crate::constants::{PHONE_COUNTRY_DIGITS, PHONE_NATIONAL_TRUNK, PHONE_SUBSCRIBER_DIGITS};
use serde::Deserialize;
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Form inputs that carry validation state. The id doubles as the DOM id of
/// the input and as the form field name sent to the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    #[inline]
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    pub fn from_id(id: &str) -> Option<Field> {
        match id {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "phone" => Some(Field::Phone),
            _ => None,
        }
    }
}

/// Raw values read from the form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl FormFields {
    #[inline]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }
}

/// Live state of one input after its latest input event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub valid: bool,
    pub error: Option<String>,
}

/// A single failed check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub message: String,
}

pub type Violations = SmallVec<[Violation; 3]>;

/// Error messages keyed by field id, in the shape the backend returns them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// First message for a field, which is the one shown next to the input.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|msgs| msgs.first())
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl From<Violations> for FieldErrors {
    fn from(violations: Violations) -> Self {
        let mut errors = FieldErrors::default();
        for v in violations {
            errors.push(v.field.id(), v.message);
        }
        errors
    }
}

pub const EMAIL_MESSAGE: &str = "Введіть коректний email";
pub const PHONE_MESSAGE: &str = "Введіть коректний номер телефону";

/// Per-surface field predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Validator {
    pub name_min_chars: usize,
}

impl Validator {
    pub fn new(name_min_chars: usize) -> Self {
        Self { name_min_chars }
    }

    pub fn name_message(&self) -> String {
        if self.name_min_chars <= 1 {
            "Вкажіть ім'я".to_string()
        } else {
            format!("Ім'я повинно містити мінімум {} символи", self.name_min_chars)
        }
    }

    #[inline]
    pub fn is_valid_name(&self, value: &str) -> bool {
        value.trim().chars().count() >= self.name_min_chars.max(1)
    }

    pub fn check(&self, field: Field, value: &str) -> FieldState {
        let valid = match field {
            Field::Name => self.is_valid_name(value),
            Field::Email => is_valid_email(value),
            Field::Phone => is_valid_phone(value),
        };
        let error = (!valid).then(|| match field {
            Field::Name => self.name_message(),
            Field::Email => EMAIL_MESSAGE.to_string(),
            Field::Phone => PHONE_MESSAGE.to_string(),
        });
        FieldState {
            value: value.to_string(),
            valid,
            error,
        }
    }

    /// Run every field check; an empty result means the form may be sent.
    pub fn validate(&self, fields: &FormFields) -> Violations {
        Field::ALL
            .iter()
            .filter_map(|&field| {
                let state = self.check(field, fields.get(field));
                state.error.map(|message| Violation { field, message })
            })
            .collect()
    }
}

/// `local@domain.tld`: a single `@`, no whitespace, and a dot inside the
/// domain with something on both sides of it.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Digits of a phone value with every mask character dropped.
pub fn phone_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Country code, national trunk `0`, then the subscriber digits.
pub fn is_valid_phone(value: &str) -> bool {
    let digits = phone_digits(value);
    let Some(rest) = digits.strip_prefix(PHONE_COUNTRY_DIGITS) else {
        return false;
    };
    let Some(subscriber) = rest.strip_prefix(PHONE_NATIONAL_TRUNK) else {
        return false;
    };
    subscriber.len() == PHONE_SUBSCRIBER_DIGITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(!is_valid_email("a@b"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("  name.surname@mail.com.ua "));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("+38(099)123-45-67"));
        assert!(is_valid_phone("380991234567"));
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("+38"));
        assert!(!is_valid_phone("+38(199)123-45-67"));
        assert!(!is_valid_phone("+38(099)123-45-678"));
    }

    #[test]
    fn name_minimum_is_per_surface() {
        let ticket = Validator::new(1);
        let subscription = Validator::new(2);
        assert!(ticket.is_valid_name(" Я "));
        assert!(!subscription.is_valid_name(" Я "));
        assert!(subscription.is_valid_name("Ян"));
        assert!(!ticket.is_valid_name("   "));
        assert_eq!(
            subscription.name_message(),
            "Ім'я повинно містити мінімум 2 символи"
        );
    }

    #[test]
    fn validate_reports_each_failed_field() {
        let v = Validator::new(1);
        let fields = FormFields {
            name: "Олена".into(),
            email: "olena@".into(),
            phone: "+38".into(),
        };
        let violations = v.validate(&fields);
        let failed: Vec<Field> = violations.iter().map(|v| v.field).collect();
        assert_eq!(failed, vec![Field::Email, Field::Phone]);

        let errors = FieldErrors::from(violations);
        assert_eq!(errors.first("email"), Some(EMAIL_MESSAGE));
        assert_eq!(errors.first("name"), None);
    }
}
