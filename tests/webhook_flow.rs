//! End-to-end: POST a gateway event to the router, with mock backend, AI agent
//! and gateway servers on ephemeral ports, and check what reaches the gateway.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tabungan_relay::{api::create_router, Dispatcher, RelayConfig};
use tower::ServiceExt;

type Outbox = Arc<Mutex<Vec<Value>>>;

async fn spawn_mock(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock local_addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{}", addr)
}

async fn record_send(State(outbox): State<Outbox>, Json(body): Json<Value>) -> StatusCode {
    outbox.lock().unwrap().push(body);
    StatusCode::OK
}

fn banking_mock() -> Router {
    Router::new()
        .route(
            "/api/ceksaldo",
            post(|Json(body): Json<Value>| async move {
                if body["telp"] == "6281234567890" {
                    Json(json!({
                        "code": 1,
                        "msg": "ok",
                        "clientsaldo": {"nama": "Budi", "saldo": "100000", "updated": "2024-01-01"}
                    }))
                } else {
                    Json(json!({"code": 0, "msg": "Maaf, nomor anda belum terdaftar."}))
                }
            }),
        )
        .route(
            "/api/cekmutasi",
            post(|| async {
                Json(json!({
                    "code": 1,
                    "msg": "ok",
                    "clientmutasi": {
                        "nama": "Budi",
                        "mutasi": [
                            {"tgl": "2024-01-01", "total": "100000", "jenis": "setor", "keterangan": "awal"},
                            {"tgl": "2024-01-20", "total": "50000", "jenis": "tarik", "keterangan": ""}
                        ]
                    }
                }))
            }),
        )
}

struct Harness {
    router: Router,
    outbox: Outbox,
}

async fn harness(with_agent: bool) -> Harness {
    let outbox: Outbox = Arc::default();
    let gateway = Router::new()
        .route("/send/message", post(record_send))
        .with_state(outbox.clone());

    let agent_url = if with_agent {
        let agent = Router::new().route(
            "/webhook/ai-agent",
            post(|Json(body): Json<Value>| async move {
                Json(json!({"reply": format!("AI: {}", body["message"]["text"].as_str().unwrap_or(""))}))
            }),
        );
        format!("{}/webhook/ai-agent", spawn_mock(agent).await)
    } else {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind free port");
        let port = listener.local_addr().expect("local_addr").port();
        drop(listener);
        format!("http://127.0.0.1:{}/webhook/ai-agent", port)
    };

    let config = RelayConfig {
        banking_base_url: spawn_mock(banking_mock()).await,
        banking_token: "test-token".to_string(),
        gateway_base_url: spawn_mock(gateway).await,
        gateway_password: "test-pass".to_string(),
        ai_agent_url: agent_url,
        http_timeout: Duration::from_secs(5),
        ..RelayConfig::default()
    };

    let dispatcher = Dispatcher::from_config(&config).expect("build dispatcher");
    Harness {
        router: create_router(Arc::new(dispatcher)),
        outbox,
    }
}

async fn post_webhook(router: &Router, from: &str, id: &str, text: &str) -> StatusCode {
    let body = json!({"from": from, "message": {"id": id, "text": text}});
    router
        .clone()
        .oneshot(
            Request::post("/webhooks")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
}

#[tokio::test]
async fn balance_command_replies_through_gateway() {
    let h = harness(true).await;

    let status = post_webhook(&h.router, "6281234567890:5@s.whatsapp.net", "ABC", "Saldo").await;
    assert_eq!(status, StatusCode::OK);

    let outbox = h.outbox.lock().unwrap();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0]["phone"], "6281234567890");
    assert_eq!(outbox[0]["reply_message_id"], "ABC");
    let message = outbox[0]["message"].as_str().unwrap();
    assert!(message.contains("Bpk/Ibu Budi"));
    assert!(message.contains("Saldo Anda : 100000"));
    assert!(message.contains("Transaksi Terakhir : 2024-01-01"));
}

#[tokio::test]
async fn unregistered_number_gets_backend_message() {
    let h = harness(true).await;

    post_webhook(&h.router, "628999:1@s.whatsapp.net", "X1", "ceksaldo").await;

    let outbox = h.outbox.lock().unwrap();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0]["message"], "Maaf, nomor anda belum terdaftar.");
}

#[tokio::test]
async fn history_command_lists_entries_in_order() {
    let h = harness(true).await;

    post_webhook(&h.router, "6281234567890@s.whatsapp.net", "H1", "MUTASI").await;

    let outbox = h.outbox.lock().unwrap();
    let message = outbox[0]["message"].as_str().unwrap();
    let first = message.find("2024-01-01: 100000 (setor)").unwrap();
    let second = message.find("2024-01-20: 50000 (tarik)").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn free_text_goes_to_agent() {
    let h = harness(true).await;

    post_webhook(&h.router, "628@s.whatsapp.net", "Q1", "Kapan jadwal umroh?").await;

    let outbox = h.outbox.lock().unwrap();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0]["message"], "AI: Kapan jadwal umroh?");
}

#[tokio::test]
async fn agent_down_still_replies_once() {
    let h = harness(false).await;

    let status = post_webhook(&h.router, "628@s.whatsapp.net", "Q2", "halo").await;
    assert_eq!(status, StatusCode::OK);

    let outbox = h.outbox.lock().unwrap();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0]["message"], "⚠ Error: Gagal menghubungi AI agent.");
}

#[tokio::test]
async fn malformed_body_sends_nothing() {
    let h = harness(true).await;

    let status = h
        .router
        .clone()
        .oneshot(Request::post("/webhooks").body(Body::from("{")).unwrap())
        .await
        .unwrap()
        .status();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(h.outbox.lock().unwrap().is_empty());
}
