//! # Salesboard
//!
//! An in-memory query engine and REST service for browsing sales transactions.
//!
//! ## Features
//!
//! - **Search**: Case-insensitive customer name or literal phone substring
//! - **Filters**: Region, gender, category, tag, payment method, age and date ranges
//! - **Stable Sorting**: By date, quantity, customer name or total amount
//! - **Pagination**: 1-based pages with totals that never report zero pages
//! - **Summary Stats**: Units, revenue and discount for a page or a whole filtered set
//! - **Atomic Imports**: The dataset is swapped as one snapshot, never edited in place
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use salesboard::prelude::*;
//!
//! let engine = InMemoryQueryEngine::with_records(mock::generate(500, 42));
//!
//! let filter = FilterSpec {
//!     regions: vec!["North".to_string()],
//!     tags: vec!["Sale".to_string()],
//!     ..Default::default()
//! };
//! let sort = SortSpec::new(SortField::TotalAmount, SortDirection::Desc);
//!
//! let page = engine.query(&filter, &sort, &PageSpec::new(1, 10)).await?;
//! println!("{} of {} matches", page.data.len(), page.pagination.total_items);
//! println!("units on this page: {}", page.page_stats().total_units);
//!
//! // Serve the same engine over HTTP
//! ServerBuilder::new()
//!     .with_service(engine)
//!     .serve()
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        error::{ConfigError, DashError, DashResult, ErrorResponse, ImportError, QueryError},
        filter::{AgeRange, DateRange, FilterSpec},
        mock,
        query::{PageSpec, PaginationMeta, QueryParams, QueryRequest, ResultPage},
        service::TransactionService,
        sort::{SortDirection, SortField, SortSpec},
        stats::SummaryStats,
        transaction::Transaction,
    };

    // === Storage ===
    pub use crate::storage::InMemoryQueryEngine;

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
}
