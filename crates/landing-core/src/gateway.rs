use crate::error::CoreError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// One gateway parameter: a scalar, or a list posted as repeated fields
/// (`productName[]` and friends).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    One(String),
    Many(Vec<String>),
}

/// Gateway parameters exactly as the backend signed them. The payload is
/// opaque to the front-end; only key order and list expansion matter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct GatewayParams(Vec<(String, ParamValue)>);

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl TryFrom<Map<String, Value>> for GatewayParams {
    type Error = CoreError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut params = Vec::with_capacity(map.len());
        for (key, value) in map {
            let param = match &value {
                Value::Array(items) => items
                    .iter()
                    .map(scalar_text)
                    .collect::<Option<Vec<_>>>()
                    .map(ParamValue::Many),
                other => scalar_text(other).map(ParamValue::One),
            };
            match param {
                Some(p) => params.push((key, p)),
                None => return Err(CoreError::GatewayParam(key)),
            }
        }
        Ok(Self(params))
    }
}

impl GatewayParams {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

/// A self-submitting POST form aimed at the payment gateway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayForm {
    pub action: String,
    pub method: &'static str,
    pub fields: Vec<HiddenField>,
}

impl GatewayForm {
    /// Flatten `params` into hidden fields; list values expand into one
    /// same-named field per element.
    pub fn build(action: &str, params: &GatewayParams) -> Self {
        let mut fields = Vec::with_capacity(params.len());
        for (name, value) in &params.0 {
            match value {
                ParamValue::One(v) => fields.push(HiddenField {
                    name: name.clone(),
                    value: v.clone(),
                }),
                ParamValue::Many(vs) => fields.extend(vs.iter().map(|v| HiddenField {
                    name: name.clone(),
                    value: v.clone(),
                })),
            }
        }
        Self {
            action: action.to_string(),
            method: "POST",
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<GatewayParams, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn lists_expand_into_repeated_fields() {
        let params = parse(r#"{"amount":"100","items":["a","b"]}"#).unwrap();
        let form = GatewayForm::build("https://secure.wayforpay.com/pay", &params);
        let pairs: Vec<(&str, &str)> = form
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
            .collect();
        assert_eq!(pairs, vec![("amount", "100"), ("items", "a"), ("items", "b")]);
        assert_eq!(form.method, "POST");
    }

    #[test]
    fn key_order_is_preserved() {
        let params = parse(r#"{"orderReference":"ORDER_1","amount":1.5,"productName[]":["T"]}"#)
            .unwrap();
        let form = GatewayForm::build("x", &params);
        let names: Vec<&str> = form.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["orderReference", "amount", "productName[]"]);
        assert_eq!(form.fields[1].value, "1.5");
    }

    #[test]
    fn nested_objects_are_rejected() {
        assert!(parse(r#"{"client":{"name":"x"}}"#).is_err());
        assert!(parse(r#"{"items":[["a"]]}"#).is_err());
    }
}
