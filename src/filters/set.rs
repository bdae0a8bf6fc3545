use crate::filters::Field;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The current search criteria: one string slot per recognized field.
///
/// This is deliberately an unvalidated string bag. Values are stored as
/// typed by the user (a malformed price like "12x0" is kept as-is) and only
/// parsed at consumption time, see [`crate::filters::SearchCriteria`].
/// An empty string means the field is unset.
///
/// The set is owned by the search view; filter controls receive a snapshot
/// plus a mutation callback, never their own copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    values: [String; Field::ALL.len()],
}

impl FilterSet {
    /// A FilterSet with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a FilterSet from incoming key-value pairs (e.g. parsed query
    /// parameters). Fields absent from the source stay empty; unknown keys
    /// are ignored. Values are not validated.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut set = Self::new();
        for (key, value) in pairs {
            set.set_by_key(key.as_ref(), value);
        }
        set
    }

    /// Build a FilterSet from a serialized query string, percent-decoding
    /// values. This is the read-back half of [`FilterSet::serialize`].
    pub fn from_query(query: &str) -> Self {
        let pairs = query.split('&').filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            let decoded = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());
            Some((key, decoded))
        });
        Self::from_pairs(pairs)
    }

    /// Current value of a field; empty string when unset.
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Replace exactly one field's value, leaving all others unchanged.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// String-keyed mutation for callers holding raw keys. Unrecognized
    /// keys are a silent no-op so typos can never grow the field set.
    pub fn set_by_key(&mut self, key: &str, value: impl Into<String>) {
        match Field::from_key(key) {
            Some(field) => self.set(field, value),
            None => debug!("Ignoring unrecognized filter field: {key}"),
        }
    }

    /// Clear every field in one atomic step. Observers never see a
    /// partially cleared set.
    pub fn reset(&mut self) {
        self.values = Default::default();
    }

    /// True when no field holds a value.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| v.is_empty())
    }

    /// Serialize the non-empty fields as a query string: `key=value` pairs
    /// joined with `&`, values percent-encoded. Empty fields are omitted
    /// entirely. The order is stable but consumers must not rely on it.
    pub fn serialize(&self) -> String {
        Field::ALL
            .iter()
            .filter(|field| !self.get(**field).is_empty())
            .map(|field| format!("{}={}", field.key(), urlencoding::encode(self.get(*field))))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_leaves_other_fields_untouched() {
        for field in Field::ALL {
            let mut filters = FilterSet::new();
            filters.set(Field::Localizacao, "Curitiba");
            let before = filters.clone();

            filters.set(field, "valor");
            assert_eq!(filters.get(field), "valor");
            for other in Field::ALL {
                if other != field {
                    assert_eq!(filters.get(other), before.get(other));
                }
            }
        }
    }

    #[test]
    fn reset_then_serialize_is_empty() {
        let mut filters = FilterSet::new();
        filters.set(Field::Tipo, "casa");
        filters.set(Field::PrecoMax, "500000");
        filters.reset();
        assert!(filters.is_empty());
        assert_eq!(filters.serialize(), "");
    }

    #[test]
    fn serialize_omits_empty_fields() {
        let mut filters = FilterSet::new();
        filters.set(Field::Quartos, "3");
        filters.set(Field::Tipo, "");
        let query = filters.serialize();
        assert_eq!(query, "quartos=3");
        assert!(!query.contains("tipo="));
    }

    #[test]
    fn initialize_single_field() {
        let filters = FilterSet::from_pairs([("tipo", "casa")]);
        assert_eq!(filters.serialize(), "tipo=casa");
    }

    #[test]
    fn unknown_key_is_a_no_op() {
        let mut filters = FilterSet::from_pairs([("tipo", "apartamento")]);
        let before = filters.serialize();
        filters.set_by_key("unknown_field", "x");
        assert_eq!(filters.serialize(), before);
        assert_eq!(filters, FilterSet::from_pairs([("tipo", "apartamento")]));
    }

    #[test]
    fn sequential_price_updates_both_survive() {
        let mut filters = FilterSet::new();
        filters.set_by_key("precoMin", "100");
        filters.set_by_key("precoMax", "200");
        let query = filters.serialize();
        assert!(query.contains("precoMin=100"));
        assert!(query.contains("precoMax=200"));
    }

    #[test]
    fn malformed_numeric_value_is_stored_as_is() {
        let mut filters = FilterSet::new();
        filters.set(Field::PrecoMin, "abc");
        assert_eq!(filters.get(Field::PrecoMin), "abc");
    }

    #[test]
    fn serialize_percent_encodes_values() {
        let mut filters = FilterSet::new();
        filters.set(Field::Localizacao, "São Paulo");
        assert_eq!(filters.serialize(), "localizacao=S%C3%A3o%20Paulo");
    }

    #[test]
    fn query_round_trip() {
        let mut filters = FilterSet::new();
        filters.set(Field::Localizacao, "São Paulo");
        filters.set(Field::PrecoMax, "750000");
        let parsed = FilterSet::from_query(&filters.serialize());
        assert_eq!(parsed, filters);
    }

    #[test]
    fn from_query_ignores_unknown_and_malformed_pairs() {
        let filters = FilterSet::from_query("tipo=casa&foo=bar&semvalor&quartos=2");
        assert_eq!(filters.get(Field::Tipo), "casa");
        assert_eq!(filters.get(Field::Quartos), "2");
        assert_eq!(filters.serialize(), "tipo=casa&quartos=2");
    }
}
