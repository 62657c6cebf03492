//! Registry load/save against the JSON file store and the catalog service's save-after-mutation rule.

use serde_json::Value as JsonValue;
use std::sync::Arc;
use saborexpress::{
    CatalogError, CatalogService, Dessert, Dish, Drink, InMemoryStore, JsonFileStore, Price,
    Registry, SizeLabel, StoreError,
};

fn price(raw: &str) -> Price {
    raw.parse().unwrap()
}

async fn seeded_service(store: Arc<JsonFileStore>) -> Result<CatalogService, CatalogError> {
    let mut service = CatalogService::open(store).await;
    service.create_establishment("Praça", "Gourmet").await?;
    service.create_establishment("Pizza Suprema", "Pizza").await?;
    service.toggle_active("praça").await?;
    service.add_rating("Praça", "Gui", 5.0).await?;
    service.add_rating("Praça", "Lais", 3.0).await?;
    service
        .add_catalog_item("Praça", Drink::new("Suco de Melancia", price("5.0"), Some(SizeLabel::from("grande"))).into())
        .await?;
    service
        .add_catalog_item("Praça", Dish::new("Pãozinho", price("2.00"), Some("O melhor pão da cidade".into())).into())
        .await?;
    service
        .add_catalog_item("Pizza Suprema", Dessert::new("Sorvete", price("12.90"), None, Some("gelado".into()), Some(SizeLabel::Volume(300))).into())
        .await?;
    Ok(service)
}

#[tokio::test]
async fn save_then_load_reproduces_the_registry() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("restaurantes.json");
    let store = Arc::new(JsonFileStore::new(&path));

    let service = seeded_service(store.clone()).await?;
    let before = service.establishments().to_vec();

    let mut registry = Registry::new(store);
    assert_eq!(registry.load().await, 2);
    assert_eq!(registry.establishments(), before.as_slice());

    let praca = registry.find_by_name("PRAÇA").unwrap();
    assert!(praca.is_active());
    assert_eq!(praca.average_rating(), Some(4.0));
    let names: Vec<&str> = praca.catalog().iter().map(|i| i.name()).collect();
    assert_eq!(names, ["Suco de Melancia", "Pãozinho"]);
    Ok(())
}

#[tokio::test]
async fn document_layout_is_a_tagged_json_array() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("restaurantes.json");
    seeded_service(Arc::new(JsonFileStore::new(&path))).await?;

    let raw = tokio::fs::read_to_string(&path).await?;
    assert!(raw.contains("\n    {"), "expected 4-space indentation");
    assert!(raw.contains("Pãozinho"), "expected unescaped UTF-8");

    let doc: JsonValue = serde_json::from_str(&raw)?;
    let first = &doc[0];
    assert_eq!(first["name"], "Praça");
    assert_eq!(first["category"], "Gourmet");
    assert_eq!(first["active"], true);
    assert_eq!(first["ratings"][0]["author"], "Gui");
    assert_eq!(first["ratings"][0]["score"].as_f64(), Some(5.0));
    assert_eq!(first["catalog"][0]["variant"], "drink");
    assert_eq!(first["catalog"][0]["size"], "grande");
    assert_eq!(first["catalog"][1]["variant"], "dish");
    assert_eq!(doc[1]["catalog"][0]["variant"], "dessert");
    assert_eq!(doc[1]["catalog"][0]["size"], 300);
    Ok(())
}

#[tokio::test]
async fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("absent.json")));
    let mut registry = Registry::new(store);
    assert_eq!(registry.load().await, 0);
    assert!(registry.is_empty());
}

#[tokio::test]
async fn malformed_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("restaurantes.json");
    tokio::fs::write(&path, "{ this is not json").await.unwrap();

    let service = CatalogService::open(Arc::new(JsonFileStore::new(&path))).await;
    assert!(service.establishments().is_empty());
}

#[tokio::test]
async fn invalid_persisted_rating_makes_the_document_malformed() {
    let store = Arc::new(InMemoryStore::with_document(
        r#"[{"name":"Praça","category":"Gourmet","active":false,"ratings":[{"author":"Gui","score":9}],"catalog":[]}]"#,
    ));
    let mut registry = Registry::new(store);
    assert_eq!(registry.load().await, 0);
}

#[tokio::test]
async fn load_replaces_in_memory_state() {
    let store = Arc::new(InMemoryStore::new());
    let mut service = CatalogService::open(store.clone()).await;
    service.create_establishment("Praça", "Gourmet").await.unwrap();

    let mut registry = Registry::new(store);
    registry.insert(saborexpress::Establishment::new("Stale", "Old"));
    assert_eq!(registry.load().await, 1);
    assert!(registry.find_by_name("Stale").is_none());
}

#[tokio::test]
async fn save_creates_missing_parent_directories() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("dados").join("nested").join("restaurantes.json");
    let mut service = CatalogService::open(Arc::new(JsonFileStore::new(&path))).await;
    service.create_establishment("Praça", "Gourmet").await?;
    assert!(path.exists());
    Ok(())
}

#[tokio::test]
async fn failed_save_is_reported_and_memory_stays_ahead() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes every write fail.
    let path = dir.path().join("restaurantes.json");
    std::fs::create_dir(&path).unwrap();

    let mut service = CatalogService::open(Arc::new(JsonFileStore::new(&path))).await;
    let err = service.create_establishment("Praça", "Gourmet").await.unwrap_err();
    assert!(matches!(err, CatalogError::Persistence(StoreError::Io { .. })));
    assert_eq!(service.establishments().len(), 1);
}

#[tokio::test]
async fn duplicate_names_are_rejected_ignoring_case() {
    let store = Arc::new(InMemoryStore::new());
    let mut service = CatalogService::open(store.clone()).await;
    service.create_establishment("Sabor & Cia", "Restaurante").await.unwrap();

    let err = service.create_establishment("sabor & cia", "Bar").await.unwrap_err();
    assert!(matches!(err, CatalogError::Duplicate(_)));
    assert_eq!(service.establishments().len(), 1);
    assert_eq!(service.establishments()[0].category(), "Restaurante");

    let err = service.create_establishment("   ", "Bar").await.unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));
}

#[tokio::test]
async fn every_mutation_is_persisted_before_returning() {
    let store = Arc::new(InMemoryStore::new());
    let mut service = CatalogService::open(store.clone()).await;

    service.create_establishment("Praça", "Gourmet").await.unwrap();
    assert!(store.document().unwrap().contains("Praça"));

    service.toggle_active("Praça").await.unwrap();
    assert!(store.document().unwrap().contains("\"active\":true"));

    service.add_rating("Praça", "Gui", 4.0).await.unwrap();
    assert!(store.document().unwrap().contains("\"author\":\"Gui\""));

    service
        .add_catalog_item("Praça", Dish::new("Pãozinho", price("2.00"), None).into())
        .await
        .unwrap();
    let item = service.apply_discount("praça", "PÃOZINHO").await.unwrap();
    assert_eq!(item.price().to_string(), "1.90");
    assert!(store.document().unwrap().contains("1.9"));
}

#[tokio::test]
async fn lookups_report_what_is_missing() {
    let mut service = CatalogService::open(Arc::new(InMemoryStore::new())).await;
    assert!(matches!(
        service.toggle_active("Nowhere").await,
        Err(CatalogError::EstablishmentNotFound(_))
    ));

    service.create_establishment("Praça", "Gourmet").await.unwrap();
    assert!(matches!(
        service.apply_discount("Praça", "Feijão").await,
        Err(CatalogError::ItemNotFound { .. })
    ));
    assert!(matches!(
        service.add_rating("Praça", "Gui", 6.0).await,
        Err(CatalogError::Validation(_))
    ));
    assert!(service.find("Praça").unwrap().ratings().is_empty());
    assert!(service.catalog("Praça").unwrap().is_empty());
}
