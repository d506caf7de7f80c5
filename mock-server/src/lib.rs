//! In-memory imitation of the ledger's accounts API.
//!
//! Serves the three calls the client consumes under
//! `/v1/organisation/accounts`, with the same status codes the real API uses
//! for the common failure cases: 400 for malformed ids or versions, 404 for
//! unknown accounts, 409 for duplicate ids and stale versions.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const ACCOUNTS_PATH: &str = "/v1/organisation/accounts";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub organisation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(default)]
    pub attributes: serde_json::Value,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub data: Account,
}

#[derive(Deserialize)]
pub struct DeleteParams {
    pub version: Option<String>,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Account>>>;

type ApiError = (StatusCode, Json<serde_json::Value>);

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error_message": message.into() })))
}

fn parse_uuid(field: &str, raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw)
        .map_err(|_| error(StatusCode::BAD_REQUEST, format!("{field} is not a valid uuid")))
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route(ACCOUNTS_PATH, post(create_account))
        .route(
            &format!("{ACCOUNTS_PATH}/{{id}}"),
            get(fetch_account).delete(delete_account),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn create_account(
    State(db): State<Db>,
    Json(input): Json<Envelope>,
) -> Result<(StatusCode, Json<Envelope>), ApiError> {
    let mut account = input.data;
    let id = parse_uuid("id", &account.id)?;
    parse_uuid("organisation_id", &account.organisation_id)?;
    if account.kind != "accounts" {
        return Err(error(StatusCode::BAD_REQUEST, "type must be accounts"));
    }

    let mut accounts = db.write().await;
    if accounts.contains_key(&id) {
        return Err(error(
            StatusCode::CONFLICT,
            "Account cannot be created as it violates a duplicate constraint",
        ));
    }
    account.version = Some(0);
    accounts.insert(id, account.clone());
    Ok((StatusCode::CREATED, Json(Envelope { data: account })))
}

async fn fetch_account(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Envelope>, ApiError> {
    let id = parse_uuid("id", &id)?;
    let accounts = db.read().await;
    accounts
        .get(&id)
        .cloned()
        .map(|data| Json(Envelope { data }))
        .ok_or_else(|| error(StatusCode::NOT_FOUND, format!("record {id} does not exist")))
}

async fn delete_account(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, ApiError> {
    let id = parse_uuid("id", &id)?;
    let version: i64 = params
        .version
        .as_deref()
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "version is required"))?
        .parse()
        .map_err(|_| error(StatusCode::BAD_REQUEST, "version must be an integer"))?;

    let mut accounts = db.write().await;
    let stored = accounts
        .get(&id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, format!("record {id} does not exist")))?;
    if stored.version != Some(version) {
        return Err(error(StatusCode::CONFLICT, "invalid version"));
    }
    accounts.remove(&id);
    Ok(StatusCode::NO_CONTENT)
}
