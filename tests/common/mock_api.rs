//! Mock catalog API for exercising the HTTP client end to end.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Canned answer returned for every route while set.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: format!(r#"{{"error": "status {}"}}"#, status),
            delay_ms: 0,
        }
    }

    pub fn raw(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    products: Arc<Mutex<Vec<Value>>>,
    override_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// The catalog served by a fresh [`MockApi`].
pub fn sample_products() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use and walks in the forest.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }),
        json!({
            "id": 2,
            "title": "Gold Ring",
            "price": 9.99,
            "description": "Classic test piece of jewelry.",
            "category": "jewelery",
            "image": "https://fakestoreapi.com/img/2.jpg",
            "rating": { "rate": 4.6, "count": 400 }
        }),
        json!({
            "id": 3,
            "title": "Portable Drive",
            "price": 64.0,
            "description": "USB 3.0 external storage.",
            "category": "electronics",
            "image": "https://fakestoreapi.com/img/3.jpg",
            "rating": { "rate": 3.3, "count": 203 }
        }),
        json!({
            "id": 4,
            "title": "Rain Jacket",
            "price": 39.99,
            "description": "Lightweight jacket.",
            "category": "women's clothing",
            "image": "https://fakestoreapi.com/img/4.jpg",
            "rating": { "rate": 3.8, "count": 679 }
        }),
    ]
}

pub struct MockApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    pub async fn start() -> Self {
        Self::with_products(sample_products()).await
    }

    pub async fn with_products(products: Vec<Value>) -> Self {
        let state = MockState {
            products: Arc::new(Mutex::new(products)),
            override_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/products", get(list_products))
            .route("/products/categories", get(list_categories))
            .route("/products/category/{category}", get(products_in_category))
            .route("/products/{id}", get(get_product))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answer every request with `response` until cleared.
    pub async fn respond_with(&self, response: MockResponse) {
        *self.state.override_response.lock().await = Some(response);
    }

    pub async fn clear_override(&self) {
        *self.state.override_response.lock().await = None;
    }

    pub async fn set_products(&self, products: Vec<Value>) {
        *self.state.products.lock().await = products;
    }

    /// Paths requested so far, in order.
    pub async fn requested_paths(&self) -> Vec<String> {
        self.state.requests.lock().await.clone()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

/// Record the request and return the override, if any.
async fn intercept(state: &MockState, path: String) -> Option<Response> {
    state.requests.lock().await.push(path);
    let response = state.override_response.lock().await.clone()?;
    if response.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(response.delay_ms)).await;
    }
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    Some((status, [(header::CONTENT_TYPE, "application/json")], response.body).into_response())
}

async fn list_products(State(state): State<MockState>) -> Response {
    if let Some(response) = intercept(&state, "/products".to_string()).await {
        return response;
    }
    Json(state.products.lock().await.clone()).into_response()
}

async fn list_categories(State(state): State<MockState>) -> Response {
    if let Some(response) = intercept(&state, "/products/categories".to_string()).await {
        return response;
    }
    let mut categories: Vec<String> = Vec::new();
    for product in state.products.lock().await.iter() {
        if let Some(category) = product.get("category").and_then(Value::as_str) {
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
    }
    Json(categories).into_response()
}

async fn products_in_category(
    State(state): State<MockState>,
    Path(category): Path<String>,
) -> Response {
    if let Some(response) = intercept(&state, format!("/products/category/{category}")).await {
        return response;
    }
    let matching: Vec<Value> = state
        .products
        .lock()
        .await
        .iter()
        .filter(|p| p.get("category").and_then(Value::as_str) == Some(category.as_str()))
        .cloned()
        .collect();
    Json(matching).into_response()
}

/// Unknown ids get an empty 200, like the public catalog API.
async fn get_product(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    if let Some(response) = intercept(&state, format!("/products/{id}")).await {
        return response;
    }
    let wanted = id.parse::<u64>().ok();
    let found = state
        .products
        .lock()
        .await
        .iter()
        .find(|p| p.get("id").and_then(Value::as_u64) == wanted && wanted.is_some())
        .cloned();
    match found {
        Some(product) => Json(product).into_response(),
        None => (StatusCode::OK, "").into_response(),
    }
}
