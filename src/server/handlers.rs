//! HTTP handlers for the transaction endpoints
//!
//! Handlers only translate between HTTP and [`TransactionService`]; all
//! query semantics live in the engine.

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::error::{DashResult, ImportError};
use crate::core::mock::{self, FilterCatalog};
use crate::core::query::{QueryParams, QueryRequest, ResultPage};
use crate::core::service::TransactionService;
use crate::core::stats::SummaryStats;
use crate::core::transaction::Transaction;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn TransactionService>,
    pub config: Arc<ServerConfig>,
}

/// Response for the list and query endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ListTransactionsResponse {
    #[serde(flatten)]
    pub page: ResultPage,

    /// Metrics over the rows of this page
    pub summary: SummaryStats,
}

impl From<ResultPage> for ListTransactionsResponse {
    fn from(page: ResultPage) -> Self {
        let summary = page.page_stats();
        Self { page, summary }
    }
}

/// Response for the import endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ImportResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> DashResult<Json<HealthResponse>> {
    let records = state.service.len().await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        records,
    }))
}

/// GET /transactions
///
/// Query params: `?page=1&limit=10&search=..&regions=North,South&sort=date:desc`
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> DashResult<Json<ListTransactionsResponse>> {
    let filter = params.filter_spec()?;
    let sort = params.sort_spec()?;
    let page = params.page_spec(state.config.default_page_size, state.config.max_page_size)?;

    let result = state.service.query(&filter, &sort, &page).await?;
    Ok(Json(result.into()))
}

/// POST /transactions/query
///
/// Body: `{"filter": {...}, "sort": {"field": "totalAmount", "direction": "desc"}, "page": 1, "limit": 10}`
pub async fn query_transactions(
    State(state): State<AppState>,
    body: Result<Json<QueryRequest>, JsonRejection>,
) -> DashResult<Json<ListTransactionsResponse>> {
    let Json(request) = body?;
    let filter = request.filter_spec()?;
    let sort = request.sort_spec()?;
    let page = request.page_spec(state.config.default_page_size, state.config.max_page_size)?;

    let result = state.service.query(&filter, &sort, &page).await?;
    Ok(Json(result.into()))
}

/// GET /transactions/stats
///
/// Accepts the same filter params as the list endpoint and aggregates over
/// every matching record, not just one page.
pub async fn transaction_stats(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> DashResult<Json<SummaryStats>> {
    let filter = params.filter_spec()?;
    let stats = state.service.filtered_stats(&filter).await?;
    Ok(Json(stats))
}

/// POST /transactions/import
///
/// Replaces the whole dataset with the posted array.
pub async fn import_transactions(
    State(state): State<AppState>,
    body: Result<Json<Vec<Transaction>>, JsonRejection>,
) -> DashResult<Json<ImportResponse>> {
    let Json(records) = body?;
    if records.is_empty() {
        return Err(ImportError::EmptyPayload.into());
    }

    let count = records.len();
    state.service.replace_dataset(records).await?;

    Ok(Json(ImportResponse {
        success: true,
        message: format!("Imported {} records", count),
    }))
}

/// GET /transactions/options
pub async fn filter_options() -> Json<FilterCatalog> {
    Json(mock::catalog())
}
