use crate::catalog::traits::ListingSource;
use crate::filters::{FilterSet, SearchCriteria};
use crate::models::{Category, Listing, Location};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

/// In-memory listing catalog seeded with sample data.
///
/// Stands in for the marketplace backend: `fetch` waits out a simulated
/// network delay and then filters the seed listings, so the search flow
/// behaves like a remote call without one existing yet.
pub struct SampleCatalog {
    listings: Vec<Listing>,
    latency: Duration,
}

impl SampleCatalog {
    /// Create a catalog with the default sample listings
    pub fn new() -> Self {
        Self::with_latency(Duration::from_millis(600))
    }

    /// Create a catalog with a custom simulated fetch latency
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            listings: sample_listings(),
            latency,
        }
    }

    /// Number of listings in the seed, before any filtering
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingSource for SampleCatalog {
    async fn fetch(&self, filters: &FilterSet) -> Result<Vec<Listing>> {
        debug!("Simulating fetch latency of {:?}", self.latency);
        tokio::time::sleep(self.latency).await;

        let criteria = SearchCriteria::from_filters(filters);
        let matching: Vec<Listing> = self
            .listings
            .iter()
            .filter(|listing| criteria.matches(listing))
            .cloned()
            .collect();

        info!(
            "Catalog returned {} of {} listings for query {:?}",
            matching.len(),
            self.listings.len(),
            filters.serialize()
        );
        Ok(matching)
    }

    fn source_name(&self) -> &'static str {
        "Sample"
    }
}

/// Sample listings based on typical marketplace inventory
fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "imovel_vm_301".to_string(),
            category: Category::Imovel,
            tipo: "apartamento".to_string(),
            title: "Apartamento 3 quartos na Vila Mariana".to_string(),
            location: Location {
                city: "São Paulo".to_string(),
                neighborhood: Some("Vila Mariana".to_string()),
                state: "SP".to_string(),
            },
            price: 685_000,
            rooms: Some(3.0),
            area_sqm: Some(92),
            description: "Apartamento reformado com varanda gourmet e duas vagas.".to_string(),
            features: vec!["Varanda".to_string(), "2 Vagas".to_string(), "Elevador".to_string()],
            images: vec![],
            url: "https://example.com/imoveis/imovel_vm_301".to_string(),
            listed_at: Utc::now(),
            raw_data: json!({ "condominio": "R$ 890/mês", "bairro": "Vila Mariana" }),
        },
        Listing {
            id: "imovel_pin_12".to_string(),
            category: Category::Imovel,
            tipo: "casa".to_string(),
            title: "Casa térrea com quintal em Pinheiros".to_string(),
            location: Location {
                city: "São Paulo".to_string(),
                neighborhood: Some("Pinheiros".to_string()),
                state: "SP".to_string(),
            },
            price: 1_250_000,
            rooms: Some(4.0),
            area_sqm: Some(180),
            description: "Casa térrea com quintal amplo, edícula e churrasqueira.".to_string(),
            features: vec!["Quintal".to_string(), "Churrasqueira".to_string()],
            images: vec![],
            url: "https://example.com/imoveis/imovel_pin_12".to_string(),
            listed_at: Utc::now(),
            raw_data: json!({ "iptu": "R$ 320/mês", "bairro": "Pinheiros" }),
        },
        Listing {
            id: "imovel_bc_77".to_string(),
            category: Category::Imovel,
            tipo: "apartamento".to_string(),
            title: "Studio mobiliado no centro de Curitiba".to_string(),
            location: Location {
                city: "Curitiba".to_string(),
                neighborhood: Some("Centro".to_string()),
                state: "PR".to_string(),
            },
            price: 320_000,
            rooms: Some(1.0),
            area_sqm: Some(34),
            description: "Studio mobiliado, pronto para morar, próximo à UFPR.".to_string(),
            features: vec!["Mobiliado".to_string(), "Academia".to_string()],
            images: vec![],
            url: "https://example.com/imoveis/imovel_bc_77".to_string(),
            listed_at: Utc::now(),
            raw_data: json!({ "condominio": "R$ 450/mês" }),
        },
        Listing {
            id: "imovel_rj_45".to_string(),
            category: Category::Imovel,
            tipo: "cobertura".to_string(),
            title: "Cobertura duplex com vista para o mar".to_string(),
            location: Location {
                city: "Rio de Janeiro".to_string(),
                neighborhood: Some("Barra da Tijuca".to_string()),
                state: "RJ".to_string(),
            },
            price: 2_900_000,
            rooms: Some(5.0),
            area_sqm: Some(240),
            description: "Cobertura duplex com piscina privativa e vista panorâmica.".to_string(),
            features: vec!["Piscina".to_string(), "Vista Mar".to_string(), "4 Vagas".to_string()],
            images: vec![],
            url: "https://example.com/imoveis/imovel_rj_45".to_string(),
            listed_at: Utc::now(),
            raw_data: json!({ "condominio": "R$ 2.100/mês", "bairro": "Barra da Tijuca" }),
        },
        Listing {
            id: "veiculo_suv_9".to_string(),
            category: Category::Veiculo,
            tipo: "suv".to_string(),
            title: "SUV compacto 2022, único dono".to_string(),
            location: Location {
                city: "Campinas".to_string(),
                neighborhood: None,
                state: "SP".to_string(),
            },
            price: 145_000,
            rooms: None,
            area_sqm: None,
            description: "SUV compacto com 28.000 km, revisões em concessionária.".to_string(),
            features: vec!["Automático".to_string(), "Câmera de Ré".to_string()],
            images: vec![],
            url: "https://example.com/veiculos/veiculo_suv_9".to_string(),
            listed_at: Utc::now(),
            raw_data: json!({ "km": 28000, "ano": 2022 }),
        },
        Listing {
            id: "veiculo_sed_3".to_string(),
            category: Category::Veiculo,
            tipo: "sedan".to_string(),
            title: "Sedan executivo 2019 completo".to_string(),
            location: Location {
                city: "São Paulo".to_string(),
                neighborhood: Some("Moema".to_string()),
                state: "SP".to_string(),
            },
            price: 98_500,
            rooms: None,
            area_sqm: None,
            description: "Sedan executivo com bancos em couro e teto solar.".to_string(),
            features: vec!["Couro".to_string(), "Teto Solar".to_string()],
            images: vec![],
            url: "https://example.com/veiculos/veiculo_sed_3".to_string(),
            listed_at: Utc::now(),
            raw_data: json!({ "km": 61000, "ano": 2019 }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_catalog() -> SampleCatalog {
        SampleCatalog::with_latency(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn empty_filters_return_every_listing() {
        let catalog = fast_catalog();
        let listings = catalog.fetch(&FilterSet::new()).await.unwrap();
        assert_eq!(listings.len(), catalog.len());
    }

    #[tokio::test]
    async fn tipo_filter_narrows_results() {
        let catalog = fast_catalog();
        let filters = FilterSet::from_pairs([("tipo", "apartamento")]);
        let listings = catalog.fetch(&filters).await.unwrap();
        assert!(!listings.is_empty());
        assert!(listings.iter().all(|l| l.tipo == "apartamento"));
    }

    #[tokio::test]
    async fn combined_filters_apply_conjunctively() {
        let catalog = fast_catalog();
        let filters = FilterSet::from_query("localizacao=S%C3%A3o%20Paulo&precoMax=700000");
        let listings = catalog.fetch(&filters).await.unwrap();
        assert!(!listings.is_empty());
        for listing in &listings {
            assert_eq!(listing.location.city, "São Paulo");
            assert!(listing.price <= 700_000);
        }
    }

    #[tokio::test]
    async fn impossible_filter_returns_empty() {
        let catalog = fast_catalog();
        let filters = FilterSet::from_pairs([("precoMin", "99999999")]);
        let listings = catalog.fetch(&filters).await.unwrap();
        assert!(listings.is_empty());
    }
}
