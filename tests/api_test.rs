use receipt_points::{build_router, AppState, InMemoryStore, ReceiptStore};
use serde_json::{json, Value};
use std::sync::Arc;

async fn spawn_server() -> String {
    let store: Arc<dyn ReceiptStore> = Arc::new(InMemoryStore::new());
    let app = build_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}

#[tokio::test]
async fn test_submit_then_points_round_trip() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/receipts/process", base))
        .json(&target_receipt())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());

    let response = client
        .get(format!("{}/receipts/{}/points", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["points"].as_i64().unwrap(), 28);
}

#[tokio::test]
async fn test_two_pm_receipt_earns_time_bonus() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let receipt = json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    });

    let response = client
        .post(format!("{}/receipts/process", base))
        .json(&receipt)
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    let id = body["id"].as_str().unwrap().to_string();

    let body: Value = client
        .get(format!("{}/receipts/{}/points", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["points"].as_i64().unwrap(), 109);
}

#[tokio::test]
async fn test_malformed_body_is_rejected_with_400() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/receipts/process", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert!(!response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_content_type_is_rejected_with_400() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/receipts/process", base))
        .body(target_receipt().to_string())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_unknown_id_returns_404_with_fixed_body() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/receipts/no-such-receipt/points", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(response.text().await.unwrap(), "Receipt not found");
}

#[tokio::test]
async fn test_duplicate_submissions_get_distinct_ids() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let mut ids = Vec::new();
    for _ in 0..2 {
        let response = client
            .post(format!("{}/receipts/process", base))
            .json(&target_receipt())
            .send()
            .await
            .unwrap();
        let body: Value = response.json().await.unwrap();
        ids.push(body["id"].as_str().unwrap().to_string());
    }

    assert_ne!(ids[0], ids[1]);

    for id in &ids {
        let body: Value = client
            .get(format!("{}/receipts/{}/points", base, id))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["points"].as_i64().unwrap(), 28);
    }
}
