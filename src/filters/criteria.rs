use crate::filters::{Field, FilterSet};
use crate::models::Listing;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Typed view of a [`FilterSet`], parsed at consumption time.
///
/// The FilterSet itself never validates anything; this is where a
/// numeric-looking string either becomes a bound or, when malformed, is
/// dropped with a warning. Unset bounds match every listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub tipo: Option<String>,
    pub localizacao: Option<String>,
    pub preco_min: Option<i64>,
    pub preco_max: Option<i64>,
    pub quartos: Option<f32>,
    pub area_min: Option<i32>,
}

impl SearchCriteria {
    /// Lenient parse of the current filter snapshot. Never fails.
    pub fn from_filters(filters: &FilterSet) -> Self {
        Self {
            tipo: non_empty(filters.get(Field::Tipo)),
            localizacao: non_empty(filters.get(Field::Localizacao)),
            preco_min: parse_bound(filters, Field::PrecoMin),
            preco_max: parse_bound(filters, Field::PrecoMax),
            quartos: parse_bound(filters, Field::Quartos),
            area_min: parse_bound(filters, Field::Area),
        }
    }

    /// Whether a listing satisfies every set criterion.
    pub fn matches(&self, listing: &Listing) -> bool {
        let tipo_ok = self
            .tipo
            .as_ref()
            .map(|t| listing.tipo.eq_ignore_ascii_case(t))
            .unwrap_or(true);

        let location_ok = self
            .localizacao
            .as_ref()
            .map(|l| {
                let needle = l.to_lowercase();
                listing.location.city.to_lowercase().contains(&needle)
                    || listing
                        .location
                        .neighborhood
                        .as_ref()
                        .map(|n| n.to_lowercase().contains(&needle))
                        .unwrap_or(false)
            })
            .unwrap_or(true);

        let min_ok = self.preco_min.map(|m| listing.price >= m).unwrap_or(true);
        let max_ok = self.preco_max.map(|m| listing.price <= m).unwrap_or(true);

        // Room and area bounds only constrain listings that carry the attribute
        let rooms_ok = match (self.quartos, listing.rooms) {
            (Some(wanted), Some(rooms)) => rooms >= wanted,
            (Some(_), None) => false,
            (None, _) => true,
        };
        let area_ok = match (self.area_min, listing.area_sqm) {
            (Some(wanted), Some(sqm)) => sqm >= wanted,
            (Some(_), None) => false,
            (None, _) => true,
        };

        tipo_ok && location_ok && min_ok && max_ok && rooms_ok && area_ok
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_bound<T: FromStr>(filters: &FilterSet, field: Field) -> Option<T>
where
    T::Err: Display,
{
    let raw = filters.get(field);
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring malformed {} value {raw:?}: {e}", field.key());
            None
        }
    }
}
