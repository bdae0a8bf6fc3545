use serde::{Deserialize, Serialize};

/// The closed set of recognized search filter fields.
///
/// Keys match the query-string names the marketplace uses, so a serialized
/// FilterSet can be read back by the results view on navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    /// Listing type (e.g. "casa", "apartamento", "suv")
    Tipo,
    /// City or neighborhood
    Localizacao,
    /// Lower price bound
    PrecoMin,
    /// Upper price bound
    PrecoMax,
    /// Minimum number of rooms
    Quartos,
    /// Minimum area in square meters
    Area,
}

impl Field {
    /// All fields, in the stable order used for serialization.
    pub const ALL: [Field; 6] = [
        Field::Tipo,
        Field::Localizacao,
        Field::PrecoMin,
        Field::PrecoMax,
        Field::Quartos,
        Field::Area,
    ];

    /// Query-string key for this field.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Tipo => "tipo",
            Field::Localizacao => "localizacao",
            Field::PrecoMin => "precoMin",
            Field::PrecoMax => "precoMax",
            Field::Quartos => "quartos",
            Field::Area => "area",
        }
    }

    /// Look up a field by its query-string key. Unknown keys yield `None`,
    /// which callers treat as a no-op rather than an error.
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.key() == key)
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Field::Tipo => 0,
            Field::Localizacao => 1,
            Field::PrecoMin => 2,
            Field::PrecoMax => 3,
            Field::Quartos => 4,
            Field::Area => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
    }

    #[test]
    fn unknown_key_is_none() {
        assert_eq!(Field::from_key("banheiros"), None);
        assert_eq!(Field::from_key(""), None);
        assert_eq!(Field::from_key("TIPO"), None);
    }

    #[test]
    fn indices_are_distinct_and_in_bounds() {
        let mut seen = [false; Field::ALL.len()];
        for field in Field::ALL {
            assert!(!seen[field.index()]);
            seen[field.index()] = true;
        }
    }
}
