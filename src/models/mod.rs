use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marketplace segment a listing belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Imovel,
    Veiculo,
}

/// Location information for a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub neighborhood: Option<String>,
    pub state: String,
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub category: Category,
    /// Listing type as shown in the search filters ("casa", "apartamento", "suv", ...)
    pub tipo: String,
    pub title: String,
    pub location: Location,
    /// Price in whole BRL
    pub price: i64,
    /// Room count; absent for vehicles
    pub rooms: Option<f32>,
    /// Usable area in square meters; absent for vehicles
    pub area_sqm: Option<i32>,
    pub description: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub url: String,
    pub listed_at: DateTime<Utc>,
    pub raw_data: serde_json::Value,
}
