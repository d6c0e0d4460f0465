use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct WeightBody {
    id: i64,
    weight: f64,
    date: String,
}

#[derive(Debug, Deserialize)]
struct DeleteBody {
    message: String,
    #[serde(rename = "deletedWeight")]
    deleted_weight: WeightBody,
}

struct TestServer {
    base_url: String,
    db_path: PathBuf,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
        let _ = std::fs::remove_file(&self.db_path);
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_db_path() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("weights_http_{}_{}.db", std::process::id(), nanos));
    path
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/weights")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let db_path = unique_db_path();
    let child = Command::new(env!("CARGO_BIN_EXE_web"))
        .env("HOST", "127.0.0.1")
        .env("PORT", port.to_string())
        .env("DATABASE_URL", format!("sqlite://{}", db_path.display()))
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer {
        base_url,
        db_path,
        child,
    }
}

async fn create(client: &Client, server: &TestServer, weight: f64, date: &str) -> WeightBody {
    let response = client
        .post(format!("{}/api/weights", server.base_url))
        .json(&json!({ "weight": weight, "date": date }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.unwrap()
}

async fn list(client: &Client, server: &TestServer) -> Vec<WeightBody> {
    let response = client
        .get(format!("{}/api/weights", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.unwrap()
}

#[tokio::test]
async fn create_then_list_round_trips() {
    let server = spawn_server().await;
    let client = Client::new();

    let first = create(&client, &server, 82.5, "2025-01-01").await;
    assert_eq!(first.weight, 82.5);
    assert_eq!(first.date, "2025-01-01");

    let second = create(&client, &server, 81.9, "2025-01-02").await;
    assert_ne!(second.id, first.id);

    let records = list(&client, &server).await;
    assert_eq!(records.len(), 2);
    assert!(
        records
            .iter()
            .any(|r| r.id == first.id && r.weight == 82.5 && r.date == "2025-01-01")
    );
}

#[tokio::test]
async fn create_rejects_missing_fields() {
    let server = spawn_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/weights", server.base_url))
        .json(&json!({ "weight": 80.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body.get("error").is_some());

    let response = client
        .post(format!("{}/api/weights", server.base_url))
        .json(&json!({ "date": "2025-01-01" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(list(&client, &server).await.is_empty());
}

#[tokio::test]
async fn create_rejects_zero_weight() {
    let server = spawn_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/weights", server.base_url))
        .json(&json!({ "weight": 0, "date": "2025-01-01" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn update_replaces_weight_and_date() {
    let server = spawn_server().await;
    let client = Client::new();

    let created = create(&client, &server, 82.5, "2025-01-01").await;

    let response = client
        .put(format!("{}/api/weights/{}", server.base_url, created.id))
        .json(&json!({ "weight": 79.2, "date": "2025-01-05" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: WeightBody = response.json().await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.weight, 79.2);
    assert_eq!(updated.date, "2025-01-05");
}

#[tokio::test]
async fn update_is_idempotent() {
    let server = spawn_server().await;
    let client = Client::new();

    let created = create(&client, &server, 82.5, "2025-01-01").await;

    for _ in 0..2 {
        let response = client
            .put(format!("{}/api/weights/{}", server.base_url, created.id))
            .json(&json!({ "weight": 79.2, "date": "2025-01-05" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated: WeightBody = response.json().await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.weight, 79.2);
        assert_eq!(updated.date, "2025-01-05");
    }

    assert_eq!(list(&client, &server).await.len(), 1);
}

#[tokio::test]
async fn update_unknown_id_returns_not_found() {
    let server = spawn_server().await;
    let client = Client::new();

    create(&client, &server, 82.5, "2025-01-01").await;

    let response = client
        .put(format!("{}/api/weights/9999", server.base_url))
        .json(&json!({ "weight": 79.2, "date": "2025-01-05" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Weight entry not found");

    assert_eq!(list(&client, &server).await.len(), 1);
}

#[tokio::test]
async fn update_rejects_missing_fields() {
    let server = spawn_server().await;
    let client = Client::new();

    let created = create(&client, &server, 82.5, "2025-01-01").await;

    let response = client
        .put(format!("{}/api/weights/{}", server.base_url, created.id))
        .json(&json!({ "weight": 79.2 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let records = list(&client, &server).await;
    assert_eq!(records[0].weight, 82.5);
}

#[tokio::test]
async fn delete_removes_exactly_one_record() {
    let server = spawn_server().await;
    let client = Client::new();

    let first = create(&client, &server, 82.5, "2025-01-01").await;
    let second = create(&client, &server, 81.0, "2025-01-02").await;

    let response = client
        .delete(format!("{}/api/weights/{}", server.base_url, first.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: DeleteBody = response.json().await.unwrap();
    assert_eq!(body.message, "Weight entry deleted successfully");
    assert_eq!(body.deleted_weight.id, first.id);
    assert_eq!(body.deleted_weight.weight, 82.5);

    let records = list(&client, &server).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, second.id);
}

#[tokio::test]
async fn delete_unknown_id_returns_not_found() {
    let server = spawn_server().await;
    let client = Client::new();

    let response = client
        .delete(format!("{}/api/weights/9999", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Weight entry not found");
}

#[tokio::test]
async fn list_orders_by_date_ascending() {
    let server = spawn_server().await;
    let client = Client::new();

    create(&client, &server, 80.0, "2025-01-03").await;
    create(&client, &server, 81.0, "2025-01-01").await;
    create(&client, &server, 79.5, "2025-01-02").await;

    let records = list(&client, &server).await;
    let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["2025-01-01", "2025-01-02", "2025-01-03"]);
}
