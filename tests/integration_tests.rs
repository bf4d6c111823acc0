//! Integration tests for the Tini Store backend

use std::fs;
use std::sync::atomic::{AtomicU64, Ordering};

use tini_store::catalog::{seed_products, ProductStore};
use tini_store::search::{ProductRanker, SynonymTable};
use tini_store::types::{NewProduct, Product};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn unique_path(name: &str) -> String {
    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("test_{}_{}_{}.jsonl", name, std::process::id(), id)
}

fn cleanup(file_path: &str) {
    let _ = fs::remove_file(file_path);
}

fn empty_store(path: &str) -> ProductStore {
    ProductStore::with_seed(path.to_string(), Vec::new(), ProductRanker::default())
}

fn new_product(name: &str, category: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price: 100.0,
        category: category.to_string(),
        image: String::new(),
        images: Vec::new(),
        description: None,
        color: None,
        material: None,
        stock: None,
        cost_price: None,
    }
}

#[test]
fn test_add_and_get_product() {
    let path = unique_path("catalog");
    let store = empty_store(&path);

    let created = store
        .add_product(new_product("Altın Kolye", "Kolye"))
        .unwrap();
    assert!(!created.id.is_empty());
    assert!(created.created_at > 0);

    let fetched = store.get_product(&created.id).unwrap().unwrap();
    assert_eq!(fetched.name, "Altın Kolye");

    cleanup(&path);
}

#[test]
fn test_catalog_persists_across_reload() {
    let path = unique_path("catalog");

    let (first_id, second_id) = {
        let store = empty_store(&path);
        let first = store.add_product(new_product("Kolye", "Kolye")).unwrap();
        let second = store
            .add_product(new_product("Bileklik", "Bileklik"))
            .unwrap();
        (first.id, second.id)
    };

    let reloaded = empty_store(&path);
    assert_eq!(reloaded.product_count(), 2);

    // Newest product stays first after a reload
    let products = reloaded.list_products(None, None).unwrap();
    assert_eq!(products[0].id, second_id);
    assert_eq!(products[1].id, first_id);

    cleanup(&path);
}

#[test]
fn test_seed_products_survive_and_yield_to_stored() {
    let path = unique_path("catalog");

    {
        let store =
            ProductStore::with_seed(path.clone(), seed_products(), ProductRanker::default());
        let mut kolye = store.get_product("seed-1").unwrap().unwrap();
        kolye.price = 1999.0;
        store.update_product(kolye).unwrap();
    }

    let reloaded = ProductStore::with_seed(path.clone(), seed_products(), ProductRanker::default());
    let kolye = reloaded.get_product("seed-1").unwrap().unwrap();
    assert_eq!(kolye.price, 1999.0);
    assert_eq!(reloaded.product_count(), seed_products().len());

    cleanup(&path);
}

#[test]
fn test_update_keeps_creation_time() {
    let path = unique_path("catalog");
    let store = empty_store(&path);

    let created = store.add_product(new_product("Kolye", "Kolye")).unwrap();

    let mut edited = created.clone();
    edited.price = 250.0;
    edited.created_at = 0;
    let updated = store.update_product(edited).unwrap();

    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.price, 250.0);

    cleanup(&path);
}

#[test]
fn test_delete_product() {
    let path = unique_path("catalog");
    let store = empty_store(&path);

    let created = store.add_product(new_product("Kolye", "Kolye")).unwrap();
    assert!(store.delete_product(&created.id).unwrap());
    assert!(!store.delete_product(&created.id).unwrap());
    assert!(store.get_product(&created.id).unwrap().is_none());

    cleanup(&path);
}

#[test]
fn test_new_arrivals_include_fresh_and_legacy() {
    let path = unique_path("catalog");
    let store = ProductStore::with_seed(path.clone(), seed_products(), ProductRanker::default());

    let fresh = store.add_product(new_product("Yeni Küpe", "Küpe")).unwrap();

    // Make one product old: half a year back
    let mut stale = store.get_product("seed-1").unwrap().unwrap();
    stale.created_at = fresh.created_at - 180 * 24 * 60 * 60;
    store.update_product(stale).unwrap();

    let arrivals = store.new_arrivals().unwrap();
    assert!(arrivals.iter().any(|p| p.id == fresh.id));
    // Legacy seed products (no timestamp) stay included
    assert!(arrivals.iter().any(|p| p.id == "seed-2"));
    // The backdated product is out
    assert!(!arrivals.iter().any(|p| p.id == "seed-1"));

    cleanup(&path);
}

#[test]
fn test_category_listing_is_diacritic_insensitive() {
    let path = unique_path("catalog");
    let store = empty_store(&path);

    store.add_product(new_product("İnci Küpe", "Küpe")).unwrap();
    store.add_product(new_product("Kolye", "Kolye")).unwrap();

    let earrings = store.products_by_category("kupe").unwrap();
    assert_eq!(earrings.len(), 1);
    assert_eq!(earrings[0].name, "İnci Küpe");

    cleanup(&path);
}

// Search through the store, end to end

fn example_catalog() -> Vec<Product> {
    let mut gold = Product::new(
        "1".to_string(),
        "Altın Minimalist Kolye".to_string(),
        1450.0,
        "Kolye".to_string(),
        String::new(),
    );
    gold.material = Some("gold".to_string());

    let mut silver = Product::new(
        "2".to_string(),
        "Gümüş Bileklik".to_string(),
        420.0,
        "Bileklik".to_string(),
        String::new(),
    );
    silver.material = Some("silver".to_string());

    vec![gold, silver]
}

fn example_store(path: &str) -> ProductStore {
    ProductStore::with_seed(path.to_string(), example_catalog(), ProductRanker::default())
}

#[test]
fn test_search_matches_name_category_and_token() {
    let path = unique_path("search");
    let store = example_store(&path);

    let by_name: Vec<String> = store
        .search_products("altin")
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(by_name, vec!["1"]);

    let by_category: Vec<String> = store
        .search_products("kolye")
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(by_category, vec!["1"]);

    let by_token: Vec<String> = store
        .search_products("gum")
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(by_token, vec!["2"]);

    cleanup(&path);
}

#[test]
fn test_search_short_query_returns_nothing() {
    let path = unique_path("search");
    let store = example_store(&path);

    assert!(store.search_products("a").unwrap().is_empty());
    assert!(store.search_products("").unwrap().is_empty());

    cleanup(&path);
}

#[test]
fn test_search_is_idempotent() {
    let path = unique_path("search");
    let store = example_store(&path);

    let first: Vec<String> = store
        .search_products("kolye bileklik")
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    let second: Vec<String> = store
        .search_products("kolye bileklik")
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();

    assert_eq!(first, second);

    cleanup(&path);
}

#[test]
fn test_search_with_custom_synonym_table() {
    let path = unique_path("search");
    let table = SynonymTable::new(vec![(
        "inci".to_string(),
        vec!["pearl".to_string()],
    )]);
    let mut pearl = Product::new(
        "pearl-1".to_string(),
        "Pearl Drop Küpe".to_string(),
        380.0,
        "Küpe".to_string(),
        String::new(),
    );
    pearl.material = Some("pearl".to_string());

    let store = ProductStore::with_seed(
        path.clone(),
        vec![pearl],
        ProductRanker::new(table),
    );

    let hits = store.search_products("inci").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "pearl-1");

    cleanup(&path);
}

#[test]
fn test_search_reflects_catalog_changes() {
    let path = unique_path("search");
    let store = empty_store(&path);

    assert!(store.search_products("halhal").unwrap().is_empty());

    store
        .add_product(new_product("Zirkon Halhal", "Halhal"))
        .unwrap();

    let hits = store.search_products("halhal").unwrap();
    assert_eq!(hits.len(), 1);

    cleanup(&path);
}
