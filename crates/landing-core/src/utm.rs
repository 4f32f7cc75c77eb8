//! Campaign attribution: UTM query parameters are remembered in cookies so a
//! purchase made later in the visit is still attributed.

use crate::constants::UTM_KEYS;

/// Attribution values keyed by UTM parameter name, in `UTM_KEYS` order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attribution {
    pairs: Vec<(&'static str, String)>,
}

impl Attribution {
    /// Collect non-empty values using `lookup` for each known key.
    pub fn collect(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let pairs = UTM_KEYS
            .iter()
            .filter_map(|&key| {
                let value = lookup(key)?;
                let value = value.trim();
                (!value.is_empty()).then(|| (key, value.to_string()))
            })
            .collect();
        Self { pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_known_non_empty_keys_in_order() {
        let attr = Attribution::collect(|key| match key {
            "utm_campaign" => Some("winter".into()),
            "utm_source" => Some("instagram".into()),
            "utm_term" => Some("  ".into()),
            _ => None,
        });
        let keys: Vec<&str> = attr.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["utm_source", "utm_campaign"]);
        assert_eq!(attr.get("utm_campaign"), Some("winter"));
        assert_eq!(attr.get("utm_term"), None);
    }
}
