//! Free-text search through the view model, from query to visible listings

use async_trait::async_trait;
use property_search::catalog;
use property_search::search::{
    filter_properties, ExtractedIntent, FilterState, IntentExtractor, SearchOutcome, View,
    ViewModel, ZonePolicy, ANY,
};
use property_search::{Operation, Property, PropertyType};
use std::sync::atomic::{AtomicUsize, Ordering};

struct RecordingExtractor {
    answer: Option<ExtractedIntent>,
    calls: AtomicUsize,
}

impl RecordingExtractor {
    fn new(answer: Option<ExtractedIntent>) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl IntentExtractor for RecordingExtractor {
    async fn extract(&self, _query: &str) -> Option<ExtractedIntent> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}

fn listing(
    id: u32,
    operation: Operation,
    kind: PropertyType,
    zone: &str,
    price: u64,
) -> Property {
    Property {
        id,
        title: format!("Listing {}", id),
        operation,
        property_type: kind,
        zone: zone.to_string(),
        price,
        bedrooms: 3,
        bathrooms: 2,
        area_sqm: 120,
        parking_spots: 2,
        tag: String::new(),
        description: String::new(),
        features: vec![],
        image_url: String::new(),
    }
}

fn cdmx_table() -> Vec<Property> {
    vec![
        listing(1, Operation::Sale, PropertyType::House, "Polanco, CDMX", 24_500_000),
        listing(
            2,
            Operation::Rent,
            PropertyType::Apartment,
            "Bosques de las Lomas, CDMX",
            85_000,
        ),
        listing(3, Operation::Sale, PropertyType::Apartment, "Santa Fe, CDMX", 8_900_000),
    ]
}

#[test]
fn test_sale_under_budget_scenario() {
    let table = cdmx_table();

    let filter = FilterState {
        operation: "Venta".to_string(),
        property_type: ANY.to_string(),
        zone: ANY.to_string(),
        max_price: "10000000".to_string(),
        query: String::new(),
    };
    let ids: Vec<u32> = filter_properties(&filter, &table).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3]);

    let ids: Vec<u32> = filter_properties(&FilterState::default(), &table)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_query_to_catalog() {
    let extractor = RecordingExtractor::new(Some(ExtractedIntent {
        operation: Some("Venta".to_string()),
        property_type: Some("Departamento".to_string()),
        zone: Some("Santa Fe".to_string()),
        max_price: Some(10_000_000),
        explanation: Some("Departamento en venta, hasta 10 millones".to_string()),
    }));

    let mut view_model = ViewModel::new(ZonePolicy::Overwrite);
    assert_eq!(view_model.zone_policy(), ZonePolicy::Overwrite);
    view_model.set_query("  depa en venta en santa fe hasta 10 millones ");

    let outcome = view_model.submit_search(&extractor).await;
    assert!(matches!(outcome, SearchOutcome::Applied(_)));
    assert_eq!(extractor.calls.load(Ordering::SeqCst), 1);
    assert_eq!(view_model.view, View::Catalog);
    assert!(!view_model.is_processing());

    let table = cdmx_table();
    let ids: Vec<u32> = view_model
        .visible_properties(&table)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![3]);
}

#[tokio::test]
async fn test_failed_extraction_keeps_manual_filters() {
    let extractor = RecordingExtractor::new(None);

    let mut view_model = ViewModel::new(ZonePolicy::Keep);
    view_model.filters.operation = "Venta".to_string();
    view_model.filters.property_type = "Casa".to_string();
    view_model.filters.max_price = "6000000".to_string();
    view_model.set_query("algo frente al mar");

    let outcome = view_model.submit_search(&extractor).await;

    assert_eq!(outcome, SearchOutcome::Unchanged);
    assert_eq!(view_model.filters.operation, "Venta");
    assert_eq!(view_model.filters.property_type, "Casa");
    assert_eq!(view_model.filters.max_price, "6000000");
    assert_eq!(view_model.view, View::Home);

    let ids: Vec<u32> = view_model
        .visible_properties(catalog::listings())
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![5]);
}

#[tokio::test]
async fn test_blank_query_never_reaches_extractor() {
    let extractor = RecordingExtractor::new(Some(ExtractedIntent::default()));
    let mut view_model = ViewModel::default();
    view_model.set_query("\t \n");

    assert_eq!(view_model.submit_search(&extractor).await, SearchOutcome::Skipped);
    assert_eq!(extractor.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_catalog_filters() {
    let listings = catalog::listings();

    let studios = FilterState {
        property_type: "Estudio".to_string(),
        ..FilterState::default()
    };
    let ids: Vec<u32> = filter_properties(&studios, listings).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3]);

    let merida = FilterState {
        zone: "MÉRIDA".to_string(),
        ..FilterState::default()
    };
    let ids: Vec<u32> = filter_properties(&merida, listings).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 5]);

    let rentals = FilterState {
        operation: "Renta".to_string(),
        ..FilterState::default()
    };
    assert!(filter_properties(&rentals, listings).is_empty());
}
