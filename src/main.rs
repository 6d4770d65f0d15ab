use anyhow::Context;
use property_search::catalog;
use property_search::format_price;
use property_search::search::{GeminiExtractor, IntentExtractor, SearchOutcome, ViewModel};
use property_search::Config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏠 Property Search");
    info!("==================");

    let config = Config::from_env().context("Failed to load configuration")?;
    let extractor = GeminiExtractor::new(config.gemini.clone())?;
    if !extractor.is_configured() {
        warn!("GEMINI_API_KEY is not set; free-text search will leave filters unchanged");
    }

    let mut view_model = ViewModel::new(config.zone_policy);
    info!("Zone policy: {:?}", view_model.zone_policy());
    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    if !query.trim().is_empty() {
        view_model.set_query(query);
        info!("Searching with {}...", extractor.provider_name());

        match view_model.submit_search(&extractor).await {
            SearchOutcome::Applied(_) => {
                if let Some(explanation) = &view_model.explanation {
                    info!("💡 {}", explanation);
                }
            }
            SearchOutcome::Unchanged => info!("Search understood nothing new; filters unchanged"),
            SearchOutcome::Skipped | SearchOutcome::Discarded => {}
        }
    }

    let filters = &view_model.filters;
    info!(
        "Filters: operation={} type={} zone={} max_price={}",
        filters.operation,
        filters.property_type,
        filters.zone,
        if filters.max_price.is_empty() { "-" } else { filters.max_price.as_str() }
    );

    let visible = view_model.visible_properties(catalog::listings());
    info!("✅ {} of {} properties match\n", visible.len(), catalog::listings().len());

    for (i, property) in visible.iter().enumerate() {
        println!("{}. {} ({})", i + 1, property.title, format_price(property.price));
        println!("   {} · {} · {}", property.operation, property.property_type, property.zone);
        println!(
            "   {} rec, {} baños, {} m², {} estac.",
            property.bedrooms, property.bathrooms, property.area_sqm, property.parking_spots
        );
        println!("   {}", property.tag);
        println!("   Features: {}", property.features.join(", "));
        println!();
    }

    Ok(())
}
