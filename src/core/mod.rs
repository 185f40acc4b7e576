//! Core module containing the transaction model and query engine types

pub mod error;
pub mod filter;
pub mod mock;
pub mod query;
pub mod service;
pub mod sort;
pub mod stats;
pub mod transaction;

pub use error::{ConfigError, DashError, DashResult, ImportError, QueryError};
pub use filter::{AgeRange, DateRange, FilterSpec};
pub use query::{
    DateRangeRequest, FilterRequest, PageSpec, PaginationMeta, QueryParams, QueryRequest, ResultPage,
    SortRequest,
};
pub use service::TransactionService;
pub use sort::{SortDirection, SortField, SortSpec};
pub use stats::SummaryStats;
pub use transaction::Transaction;
