//! In-memory stand-in for the Ardoq REST API.
//!
//! Serves `/api/{kind}` and `/api/{kind}/{id}` for the `workspace`,
//! `component`, and `reference` collections. Elements are arbitrary JSON
//! objects keyed by a generated `id`. Every request must carry
//! `Authorization: Token token=<token>`; other values of the same header are
//! ignored as long as one of them matches.
//!
//! Status codes follow the live API: reads and writes answer `200 OK`,
//! deletes answer `204 No Content`, and unknown kinds or ids answer `404`.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const KINDS: [&str; 3] = ["workspace", "component", "reference"];

pub type Element = Map<String, Value>;
pub type Db = Arc<RwLock<HashMap<&'static str, HashMap<String, Element>>>>;

#[derive(Clone)]
pub struct AppState {
    db: Db,
    auth: Arc<str>,
}

pub fn app(token: &str) -> Router {
    let collections = KINDS.iter().map(|k| (*k, HashMap::new())).collect();
    let state = AppState {
        db: Arc::new(RwLock::new(collections)),
        auth: format!("Token token={token}").into(),
    };
    Router::new()
        .route("/api/{kind}", get(list_elements).post(create_element))
        .route(
            "/api/{kind}/{id}",
            get(get_element)
                .patch(update_element)
                .post(replace_element)
                .delete(delete_element),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_token))
        .with_state(state)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(token)).await
}

#[derive(Debug)]
pub enum Failure {
    Unauthorized,
    NotFound,
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Failure::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized"),
            Failure::NotFound => (StatusCode::NOT_FOUND, "not found"),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, Failure> {
    let authorized = request
        .headers()
        .get_all(AUTHORIZATION)
        .iter()
        .any(|v| v.as_bytes() == state.auth.as_bytes());
    if !authorized {
        tracing::debug!(uri = %request.uri(), "rejecting request without valid token");
        return Err(Failure::Unauthorized);
    }
    Ok(next.run(request).await)
}

fn collection(kind: &str) -> Result<&'static str, Failure> {
    KINDS.iter().copied().find(|k| *k == kind).ok_or(Failure::NotFound)
}

/// `field`+`value` match `element[field] == value`; any other key matches
/// `element[key] == value`.
fn matches(element: &Element, params: &HashMap<String, String>) -> bool {
    let field_eq =
        |field: &str, value: &str| element.get(field).and_then(Value::as_str) == Some(value);

    let mut rest: Vec<(&str, &str)> = Vec::new();
    match (params.get("field"), params.get("value")) {
        (Some(field), Some(value)) => {
            if !field_eq(field.as_str(), value.as_str()) {
                return false;
            }
            rest.extend(
                params
                    .iter()
                    .filter(|(k, _)| *k != "field" && *k != "value")
                    .map(|(k, v)| (k.as_str(), v.as_str())),
            );
        }
        _ => rest.extend(params.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
    }
    rest.into_iter().all(|(k, v)| field_eq(k, v))
}

async fn list_elements(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Element>>, Failure> {
    let kind = collection(&kind)?;
    let db = state.db.read().await;
    let found: Vec<Element> = db
        .get(kind)
        .map(|elements| {
            elements
                .values()
                .filter(|e| matches(e, &params))
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    Ok(Json(found))
}

async fn create_element(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(mut element): Json<Element>,
) -> Result<Json<Element>, Failure> {
    let kind = collection(&kind)?;
    let id = Uuid::new_v4().to_string();
    element.insert("id".to_string(), Value::String(id.clone()));
    tracing::debug!(kind, %id, "created element");

    let mut db = state.db.write().await;
    db.entry(kind).or_default().insert(id, element.clone());
    Ok(Json(element))
}

async fn get_element(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Json<Element>, Failure> {
    let kind = collection(&kind)?;
    let db = state.db.read().await;
    db.get(kind)
        .and_then(|elements| elements.get(&id))
        .cloned()
        .map(Json)
        .ok_or(Failure::NotFound)
}

async fn update_element(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    Json(input): Json<Element>,
) -> Result<Json<Element>, Failure> {
    let kind = collection(&kind)?;
    let mut db = state.db.write().await;
    let element = db
        .get_mut(kind)
        .and_then(|elements| elements.get_mut(&id))
        .ok_or(Failure::NotFound)?;
    for (key, value) in input {
        if key != "id" {
            element.insert(key, value);
        }
    }
    Ok(Json(element.clone()))
}

async fn replace_element(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    Json(mut input): Json<Element>,
) -> Result<Json<Element>, Failure> {
    let kind = collection(&kind)?;
    let mut db = state.db.write().await;
    let element = db
        .get_mut(kind)
        .and_then(|elements| elements.get_mut(&id))
        .ok_or(Failure::NotFound)?;
    input.insert("id".to_string(), Value::String(id));
    *element = input;
    Ok(Json(element.clone()))
}

async fn delete_element(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<StatusCode, Failure> {
    let kind = collection(&kind)?;
    let mut db = state.db.write().await;
    db.get_mut(kind)
        .and_then(|elements| elements.remove(&id))
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(Failure::NotFound)
}
