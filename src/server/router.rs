//! Router builder for the transaction routes

use crate::server::handlers::{
    AppState, filter_options, health, import_transactions, list_transactions, query_transactions,
    transaction_stats,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Build the transaction routes
///
/// - GET  /health               - Liveness and record count
/// - GET  /transactions         - Filtered, sorted, paginated list
/// - POST /transactions/query   - Same as above with a JSON query body
/// - GET  /transactions/stats   - Summary over the whole filtered set
/// - POST /transactions/import  - Replace the dataset
/// - GET  /transactions/options - Filter choices for the dashboard
pub fn build_transaction_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/transactions", get(list_transactions))
        .route("/transactions/query", post(query_transactions))
        .route("/transactions/stats", get(transaction_stats))
        .route("/transactions/import", post(import_transactions))
        .route("/transactions/options", get(filter_options))
        .with_state(state)
}
