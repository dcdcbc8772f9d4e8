//! In-process stand-in for the MockTrade service.
//!
//! Just enough behaviour for the feature files: orders are kept in memory so
//! that listing, fetching, cancelling and filling see what was created, and
//! login accepts any username with [`VALID_PASSWORD`].

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const VALID_PASSWORD: &str = "password123";

type OrderBook = Arc<Mutex<Vec<Value>>>;

pub struct TradeStub {
    server: MockServer,
}

impl TradeStub {
    pub async fn start(base_path: &str) -> Self {
        let server = MockServer::start().await;
        let base = base_path.trim_end_matches('/').to_string();
        let orders: OrderBook = Arc::default();
        let current_user: Arc<Mutex<Option<String>>> = Arc::default();

        // ── Auth ─────────────────────────────────────────────────────────

        let user = current_user.clone();
        Mock::given(method("POST"))
            .and(path(format!("{}/auth/login", base)))
            .respond_with(move |req: &Request| {
                let body: Value = serde_json::from_slice(&req.body).unwrap_or(Value::Null);
                let username = body["username"].as_str().unwrap_or_default();
                if username.is_empty() || body["password"] != VALID_PASSWORD {
                    return ResponseTemplate::new(401)
                        .set_body_json(json!({"detail": "Incorrect username, password, or role"}));
                }
                *user.lock().unwrap() = Some(username.to_string());
                ResponseTemplate::new(200).set_body_json(json!({
                    "access_token": "stub-token",
                    "token_type": "bearer",
                    "user": user_json(username),
                }))
            })
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path(format!("{}/auth/logout", base)))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": "Successfully logged out"})),
            )
            .mount(&server)
            .await;

        let user = current_user.clone();
        Mock::given(method("GET"))
            .and(path(format!("{}/auth/me", base)))
            .respond_with(move |_: &Request| match user.lock().unwrap().as_deref() {
                Some(username) => ResponseTemplate::new(200).set_body_json(user_json(username)),
                None => ResponseTemplate::new(401)
                    .set_body_json(json!({"detail": "Could not validate credentials"})),
            })
            .mount(&server)
            .await;

        // ── Orders ───────────────────────────────────────────────────────

        let book = orders.clone();
        Mock::given(method("POST"))
            .and(path(format!("{}/orders/", base)))
            .respond_with(move |req: &Request| {
                let Ok(Value::Object(mut order)) = serde_json::from_slice(&req.body) else {
                    return ResponseTemplate::new(422).set_body_json(json!({"detail": "invalid body"}));
                };
                let mut book = book.lock().unwrap();
                order.insert("id".into(), json!(format!("ord-{:04}", book.len() + 1)));
                order.insert("status".into(), json!("NEW"));
                let order = Value::Object(order);
                book.push(order.clone());
                ResponseTemplate::new(200).set_body_json(order)
            })
            .mount(&server)
            .await;

        let book = orders.clone();
        Mock::given(method("GET"))
            .and(path(format!("{}/orders/", base)))
            .respond_with(move |_: &Request| {
                ResponseTemplate::new(200).set_body_json(Value::Array(book.lock().unwrap().clone()))
            })
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path(format!("{}/orders/strategy", base)))
            .respond_with(|req: &Request| {
                let body: Value = serde_json::from_slice(&req.body).unwrap_or(Value::Null);
                ResponseTemplate::new(200).set_body_json(json!({
                    "id": "strat-0001",
                    "status": "NEW",
                    "strategy": body,
                }))
            })
            .mount(&server)
            .await;

        let prefix = format!("{}/orders/", base);
        let book = orders.clone();
        let p = prefix.clone();
        Mock::given(method("GET"))
            .and(path_regex(format!(r"^{}[^/]+$", regex::escape(&prefix))))
            .respond_with(move |req: &Request| update_order(&book, &p, req, None))
            .mount(&server)
            .await;

        let book = orders.clone();
        let p = prefix.clone();
        Mock::given(method("POST"))
            .and(path_regex(format!(r"^{}[^/]+/cancel$", regex::escape(&prefix))))
            .respond_with(move |req: &Request| update_order(&book, &p, req, Some("CANCELLED")))
            .mount(&server)
            .await;

        let book = orders;
        let p = prefix.clone();
        Mock::given(method("POST"))
            .and(path_regex(format!(
                r"^{}[^/]+/simulate_fill$",
                regex::escape(&prefix)
            )))
            .respond_with(move |req: &Request| update_order(&book, &p, req, Some("FILLED")))
            .mount(&server)
            .await;

        tracing::info!(uri = %server.uri(), "Started trading API stub");
        Self { server }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }
}

fn user_json(username: &str) -> Value {
    json!({
        "id": format!("usr-{}", username),
        "username": username,
        "name": username,
        "roles": ["trader"],
    })
}

/// Find the order named in the path and optionally move it to `status`.
fn update_order(book: &OrderBook, prefix: &str, req: &Request, status: Option<&str>) -> ResponseTemplate {
    let id = req
        .url
        .path()
        .strip_prefix(prefix)
        .and_then(|rest| rest.split('/').next())
        .unwrap_or_default();

    let mut book = book.lock().unwrap();
    match book.iter_mut().find(|order| order["id"] == id) {
        Some(order) => {
            if let Some(status) = status {
                order["status"] = json!(status);
            }
            ResponseTemplate::new(200).set_body_json(order.clone())
        }
        None => ResponseTemplate::new(404).set_body_json(json!({"detail": "Order not found"})),
    }
}
