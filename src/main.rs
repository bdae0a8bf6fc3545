mod catalog;
mod chat;
mod filters;
mod models;

use catalog::{ListingSource, SampleCatalog};
use chat::{ChatMessage, ChatSimulator, Sender};
use chrono::Utc;
use filters::FilterSet;
use tracing::{info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Listing Scout - Marketplace Search Demo");
    info!("==========================================");
    info!("");

    // Build the filter snapshot from an optional query-string argument,
    // e.g. listing-scout "tipo=apartamento&precoMax=700000"
    let filters = match std::env::args().nth(1) {
        Some(query) => FilterSet::from_query(&query),
        None => FilterSet::new(),
    };
    info!("Active filters: {:?}", filters.serialize());

    // Fetch matching listings from the sample catalog
    let source = SampleCatalog::new();
    info!(
        "Searching {} listings from {} source...",
        source.len(),
        source.source_name()
    );
    let listings = source.fetch(&filters).await?;

    // Display results
    info!("\n✅ Found {} matching listings\n", listings.len());

    for (i, listing) in listings.iter().enumerate() {
        println!("{}. {} (R$ {})", i + 1, listing.title, listing.price);
        println!(
            "   {} · {}{}",
            listing.tipo,
            listing.location.city,
            listing
                .location
                .neighborhood
                .as_ref()
                .map(|n| format!(" ({n})"))
                .unwrap_or_default()
        );
        if let Some(rooms) = listing.rooms {
            println!("   {} quartos, {} m²", rooms, listing.area_sqm.unwrap_or(0));
        }
        println!("   Features: {}", listing.features.join(", "));
        println!("   URL: {}", listing.url);
        println!();
    }

    // Save results to JSON file
    let json = serde_json::to_string_pretty(&listings)?;
    tokio::fs::write("search_results.json", json).await?;
    info!("💾 Saved results to search_results.json");

    // Run one simulated chat exchange
    info!("");
    info!("💬 Chat demo");
    let simulator = ChatSimulator::new();
    let question = ChatMessage {
        sender: Sender::Visitor,
        body: "Posso agendar uma visita?".to_string(),
        sent_at: Utc::now(),
    };
    println!("Visitante: {}", question.body);
    if let Some(reply) = simulator.reply(&question.body).join().await? {
        println!("Atendente: {}", reply.body);
    }

    Ok(())
}
