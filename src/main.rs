// Command-line runner: evaluates one listing query against a hotel fixture
//
// Usage: hotel_query_engine [fixture.json] [filters-json] [advanced-filters-json] [page]

use anyhow::Context;
use hotel_query_engine::dataset::SAMPLE_HOTELS_PATH;
use hotel_query_engine::{EngineConfig, FixtureDataset, HotelQueryEngine, ListingQuery};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let fixture = args.first().map(String::as_str).unwrap_or(SAMPLE_HOTELS_PATH);
    let filters = args.get(1).map(String::as_str).unwrap_or(r#"{"city": ""}"#);
    let advanced_filters = args.get(2).map(String::as_str);
    let page = args.get(3).map(String::as_str);

    let dataset = FixtureDataset::load(fixture)
        .with_context(|| format!("loading hotel fixture from {}", fixture))?;
    let engine = HotelQueryEngine::new(dataset, EngineConfig::default())?;

    let query = ListingQuery::from_params(page, filters, advanced_filters)?;
    let results = engine.search(&query)?;

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
