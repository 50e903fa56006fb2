use anyhow::Context;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, info, instrument};

use crate::{
    accounts::{
        dto::{Ack, AccountSummary, CreateAccountRequest},
        password,
        repo::Account,
    },
    errors::ApiError,
    state::AppState,
};

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_accounts).post(create_account))
        .route(
            "/users/:id",
            get(get_account).put(update_account).delete(delete_account),
        )
}

/// Deprecated: superseded by the newer signup flow; kept for clients that
/// still post here. Accepts any two strings, answers with an empty object.
#[instrument(skip(state, body))]
pub async fn create_account(
    State(state): State<AppState>,
    Json(body): Json<CreateAccountRequest>,
) -> Result<Json<Ack>, ApiError> {
    // Hash first; the connection is only needed for the insert.
    let hashed = password::hash_password(&body.password)?;
    let account = Account::new(body.email, hashed);

    let mut conn = state.db.acquire().await.context("acquire connection")?;
    account.insert(&mut conn).await?;

    info!(account_id = %account.id, "account created");
    Ok(Json(Ack {}))
}

#[instrument(skip(state))]
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountSummary>>, ApiError> {
    let mut conn = state.db.acquire().await.context("acquire connection")?;
    let accounts = Account::list(&mut conn).await?;
    let summaries = accounts.into_iter().map(AccountSummary::from).collect();
    Ok(Json(summaries))
}

#[instrument(skip(state))]
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AccountSummary>, ApiError> {
    let mut conn = state.db.acquire().await.context("acquire connection")?;
    let account = Account::find_by_id(&mut conn, &id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(AccountSummary::from(account)))
}

/// Accepts the request and applies no change: field updates are not wired
/// up yet, and callers get the same empty ack as a successful write. Takes
/// no database connection.
#[instrument]
pub async fn update_account(Path(id): Path<String>) -> Json<Ack> {
    debug!(account_id = %id, "account update accepted, no fields applied");
    Json(Ack {})
}

#[instrument(skip(state))]
pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ack>, ApiError> {
    let mut conn = state.db.acquire().await.context("acquire connection")?;
    let rows = Account::mark_deleted(&mut conn, &id).await?;
    info!(account_id = %id, rows, "account flagged deleted");
    Ok(Json(Ack {}))
}
