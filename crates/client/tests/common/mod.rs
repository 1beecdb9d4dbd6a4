//! Shared test backend speaking the password-manager HTTP contract
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde_json::{json, Value};
use url::Url;

use client::prelude::*;

/// How the backend answers mutating requests. The real one is not
/// consistent about this, so the tests get to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckStyle {
    /// JSON body describing the affected entity.
    Json,
    /// Bare `OK` as plain text.
    Text,
    /// 200 with an empty body.
    Empty,
}

/// How site listings are shaped on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// A bare JSON array.
    Direct,
    /// An object wrapping the array: `{"sites": [...]}`.
    Wrapped,
}

#[derive(Debug, Clone, serde::Serialize)]
struct StoredCategory {
    id: i64,
    name: String,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredSite {
    id: i64,
    name: String,
    url: String,
    user: String,
    password: String,
    description: String,
    category_id: i64,
}

struct Backend {
    categories: Vec<StoredCategory>,
    sites: Vec<StoredSite>,
    next_id: i64,
    ack_style: AckStyle,
    list_shape: ListShape,
}

impl Backend {
    fn take_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

type Shared = Arc<Mutex<Backend>>;

/// An in-process backend on an ephemeral port, with direct handles for
/// seeding and inspecting its store behind the HTTP surface.
pub struct TestBackend {
    pub base_url: Url,
    state: Shared,
}

impl TestBackend {
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url).unwrap()
    }

    /// Seed a category directly into the store, returning its id.
    pub fn seed_category(&self, name: &str) -> Id {
        let mut backend = self.state.lock().unwrap();
        let id = backend.take_id();
        backend.categories.push(StoredCategory {
            id,
            name: name.to_string(),
        });
        Id::from(id)
    }

    /// Seed a site under a category, returning its id. The url doubles as
    /// the name, like the stock front end creates them.
    pub fn seed_site(&self, category_id: &Id, url: &str, user: &str) -> Id {
        let mut backend = self.state.lock().unwrap();
        let id = backend.take_id();
        backend.sites.push(StoredSite {
            id,
            name: url.to_string(),
            url: url.to_string(),
            user: user.to_string(),
            password: "pw".to_string(),
            description: String::new(),
            category_id: raw(category_id),
        });
        Id::from(id)
    }

    pub fn category_count(&self) -> usize {
        self.state.lock().unwrap().categories.len()
    }

    pub fn site_count(&self) -> usize {
        self.state.lock().unwrap().sites.len()
    }

    pub fn has_category(&self, id: &Id) -> bool {
        let want = raw(id);
        self.state
            .lock()
            .unwrap()
            .categories
            .iter()
            .any(|c| c.id == want)
    }

    pub fn has_site(&self, id: &Id) -> bool {
        let want = raw(id);
        self.state.lock().unwrap().sites.iter().any(|s| s.id == want)
    }
}

fn raw(id: &Id) -> i64 {
    match id {
        Id::Number(n) => *n,
        Id::Text(s) => s.parse().expect("seeded ids are numeric"),
    }
}

/// Spawn a backend with JSON acks and bare-array site lists.
pub async fn spawn_backend() -> TestBackend {
    spawn_backend_with(AckStyle::Json, ListShape::Direct).await
}

pub async fn spawn_backend_with(ack_style: AckStyle, list_shape: ListShape) -> TestBackend {
    let state = Arc::new(Mutex::new(Backend {
        categories: Vec::new(),
        sites: Vec::new(),
        next_id: 1,
        ack_style,
        list_shape,
    }));

    let router = Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/:id",
            get(category_sites).post(create_site).delete(delete_category),
        )
        .route("/sites", get(all_sites))
        .route("/sites/:id", delete(delete_site))
        .with_state(state.clone());

    let base_url = serve(router).await;
    TestBackend { base_url, state }
}

async fn list_categories(State(state): State<Shared>) -> Json<Vec<StoredCategory>> {
    Json(state.lock().unwrap().categories.clone())
}

async fn create_category(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let Some(name) = body.get("name").and_then(Value::as_str) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let mut backend = state.lock().unwrap();
    let id = backend.take_id();
    backend.categories.push(StoredCategory {
        id,
        name: name.to_string(),
    });
    ack(backend.ack_style, json!({"id": id, "name": name}))
}

async fn delete_category(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut backend = state.lock().unwrap();
    let before = backend.categories.len();
    backend.categories.retain(|c| c.id != id);
    if backend.categories.len() == before {
        return StatusCode::NOT_FOUND.into_response();
    }
    // The real backend cascades: a category takes its sites with it.
    backend.sites.retain(|s| s.category_id != id);
    ack(backend.ack_style, json!({"deleted": id}))
}

async fn category_sites(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let backend = state.lock().unwrap();
    if !backend.categories.iter().any(|c| c.id == id) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let sites: Vec<StoredSite> = backend
        .sites
        .iter()
        .filter(|s| s.category_id == id)
        .cloned()
        .collect();
    shaped(backend.list_shape, sites)
}

async fn all_sites(State(state): State<Shared>) -> Response {
    let backend = state.lock().unwrap();
    shaped(backend.list_shape, backend.sites.clone())
}

async fn create_site(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    if !backend.categories.iter().any(|c| c.id == id) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let field = |key: &str| {
        body.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let site = StoredSite {
        id: backend.take_id(),
        name: field("name"),
        url: field("url"),
        user: field("user"),
        password: field("password"),
        description: field("description"),
        category_id: id,
    };
    let entity = json!(site);
    backend.sites.push(site);
    ack(backend.ack_style, entity)
}

async fn delete_site(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut backend = state.lock().unwrap();
    let before = backend.sites.len();
    backend.sites.retain(|s| s.id != id);
    if backend.sites.len() == before {
        return StatusCode::NOT_FOUND.into_response();
    }
    ack(backend.ack_style, json!({"deleted": id}))
}

fn ack(style: AckStyle, entity: Value) -> Response {
    match style {
        AckStyle::Json => Json(entity).into_response(),
        AckStyle::Text => "OK".into_response(),
        AckStyle::Empty => StatusCode::OK.into_response(),
    }
}

fn shaped(shape: ListShape, sites: Vec<StoredSite>) -> Response {
    match shape {
        ListShape::Direct => Json(json!(sites)).into_response(),
        ListShape::Wrapped => Json(json!({ "sites": sites })).into_response(),
    }
}

/// Canned single-route replies for exercising body normalization.
pub async fn spawn_fixture_server() -> Url {
    let router = Router::new()
        .route("/empty", get(|| async { StatusCode::OK }))
        .route("/ack", get(|| async { "OK" }))
        .route("/whitespace", get(|| async { " " }))
        .route("/entity", get(|| async { Json(json!({"id": 7, "name": "Work"})) }))
        .route(
            "/broken",
            get(|| async {
                // Claims JSON but does not deliver it.
                ([(CONTENT_TYPE, "application/json")], "{\"unterminated").into_response()
            }),
        )
        .route("/echo-content-type", get(echo_content_type))
        .route("/fail", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({"error": "no such record"}))) }),
        );
    serve(router).await
}

async fn echo_content_type(headers: HeaderMap) -> String {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("missing")
        .to_string()
}

/// A url nothing listens on: bind an ephemeral port, then free it.
pub async fn unreachable_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}")).unwrap()
}

async fn serve(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{addr}")).unwrap()
}
