//! End-to-end product lookups against a local product database

mod common;

use common::{ProductServer, Reply, client_for, found, unreachable_base_url};
use foodscan::product::{FIXTURE_BARCODE, FIXTURE_IMAGE_URI, ProductResolver};
use foodscan::{DietaryProfile, VerdictStatus};
use serde_json::json;

fn vegan() -> DietaryProfile {
    DietaryProfile::new(["vegan"])
}

#[tokio::test]
async fn test_found_product_with_milk_is_not_vegan() {
    let server = ProductServer::start(vec![(
        "5000000000017",
        found(json!({
            "product_name": "Hot Chocolate",
            "ingredients_text": "Water, Milk, Sugar",
            "image_url": "https://img/hot-chocolate.jpg"
        })),
    )]);
    let resolver = ProductResolver::new(server.client());

    let product = resolver
        .resolve("5000000000017", &vegan())
        .await
        .expect("product should resolve");

    assert_eq!(product.product_name(), "Hot Chocolate");
    assert_eq!(product.status(), VerdictStatus::No);
    assert!(product.verdict.reason.contains("animal products"));
    assert_eq!(product.health_score(), 20);
    assert_eq!(product.product.nutrition_image_uri, "https://img/hot-chocolate.jpg");
}

#[tokio::test]
async fn test_ingredient_list_is_used_when_text_missing() {
    let server = ProductServer::start(vec![(
        "42",
        found(json!({
            "product_name": "Honey Oats",
            "ingredients": [{ "text": "Oats" }, { "text": "Honey" }]
        })),
    )]);
    let resolver = ProductResolver::new(server.client());

    let product = resolver.resolve("42", &vegan()).await.expect("product");
    assert_eq!(product.product.ingredient_text, "Oats, Honey");
    assert_eq!(product.status(), VerdictStatus::No);
}

#[tokio::test]
async fn test_not_found_is_none() {
    let server = ProductServer::start(Vec::new());
    let resolver = ProductResolver::new(server.client());

    assert!(resolver.resolve("0000000000000", &vegan()).await.is_none());
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_http_errors_and_bad_bodies_are_none() {
    let server = ProductServer::start(vec![
        ("500", Reply::raw(500, "{\"error\":\"boom\"}")),
        ("404", Reply::raw(404, "{\"status\":0}")),
        ("html", Reply::raw(200, "<html>maintenance</html>")),
        ("shape", Reply::raw(200, "{\"status\":\"yes\"}")),
    ]);
    let resolver = ProductResolver::new(server.client());

    for barcode in ["500", "404", "html", "shape"] {
        assert!(
            resolver.resolve(barcode, &vegan()).await.is_none(),
            "{barcode} should resolve to None"
        );
    }
}

#[tokio::test]
async fn test_unreachable_database_is_none() {
    let resolver = ProductResolver::new(client_for(&unreachable_base_url()));
    assert!(resolver.resolve("123", &vegan()).await.is_none());
}

#[tokio::test]
async fn test_fixture_survives_unreachable_database() {
    let resolver = ProductResolver::new(client_for(&unreachable_base_url()));

    let product = resolver
        .resolve(FIXTURE_BARCODE, &vegan())
        .await
        .expect("fixture should resolve");

    assert_eq!(product.product_name(), "Pringles Sour Cream and Onion");
    assert_eq!(product.status(), VerdictStatus::No);
    assert_eq!(product.health_score(), 15);
    assert_eq!(product.product.image_uri, FIXTURE_IMAGE_URI);
}

#[tokio::test]
async fn test_fixture_takes_remote_image() {
    let server = ProductServer::start(vec![(
        FIXTURE_BARCODE,
        found(json!({
            "product_name": "Pringles",
            "ingredients_text": "Potatoes",
            "image_url": "https://img/pringles.jpg"
        })),
    )]);
    let resolver = ProductResolver::new(server.client());

    let product = resolver
        .resolve(FIXTURE_BARCODE, &DietaryProfile::default())
        .await
        .expect("fixture should resolve");

    assert_eq!(product.product_name(), "Pringles Sour Cream and Onion");
    assert_eq!(product.status(), VerdictStatus::No);
    assert_eq!(product.health_score(), 15);
    assert_eq!(product.product.image_uri, "https://img/pringles.jpg");
    assert_eq!(product.product.nutrition_image_uri, "https://img/pringles.jpg");
}

#[tokio::test]
async fn test_requests_identify_the_client() {
    let server = ProductServer::start(Vec::new());
    let resolver = ProductResolver::new(server.client());

    resolver.resolve("1", &vegan()).await;
    assert_eq!(server.user_agents(), vec!["foodscan-tests/1.0".to_string()]);
}

#[tokio::test]
async fn test_padded_fixture_barcode_still_gets_fixture() {
    let server = ProductServer::start(vec![(
        FIXTURE_BARCODE,
        found(json!({
            "product_name": "Real Pringles",
            "ingredients_text": "Potatoes, Salt"
        })),
    )]);
    let resolver = ProductResolver::new(server.client());

    let padded = format!(" {FIXTURE_BARCODE}\n");
    let product = resolver
        .resolve(&padded, &DietaryProfile::default())
        .await
        .expect("fixture should resolve");

    assert_eq!(product.product_name(), "Pringles Sour Cream and Onion");
    assert_eq!(product.status(), VerdictStatus::No);
    assert_eq!(product.health_score(), 15);
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_mistyped_name_still_resolves() {
    let server = ProductServer::start(vec![(
        "77",
        found(json!({
            "product_name": 12345,
            "ingredients_text": "Water, Milk"
        })),
    )]);
    let resolver = ProductResolver::new(server.client());

    let product = resolver.resolve("77", &vegan()).await.expect("product");
    assert_eq!(product.product_name(), "Unknown Product");
    assert_eq!(product.product.ingredient_text, "Water, Milk");
    assert_eq!(product.status(), VerdictStatus::No);
}

#[tokio::test]
async fn test_qr_payload_is_one_path_segment() {
    let server = ProductServer::start(vec![(
        "a%2Fb%3Fc%23d",
        found(json!({ "product_name": "Encoded", "ingredients_text": "Oats" })),
    )]);
    let resolver = ProductResolver::new(server.client());

    let product = resolver
        .resolve("a/b?c#d", &vegan())
        .await
        .expect("encoded payload should hit its own route");
    assert_eq!(product.product_name(), "Encoded");
    assert_eq!(server.hits(), 1);
}
