//! In-memory implementation of TransactionService
//!
//! This is the one query engine of the crate: the HTTP service and the
//! standalone demo both drive it through [`TransactionService`].

use crate::core::error::{DashError, DashResult};
use crate::core::filter::FilterSpec;
use crate::core::query::{PageSpec, PaginationMeta, ResultPage};
use crate::core::service::TransactionService;
use crate::core::sort::SortSpec;
use crate::core::stats::SummaryStats;
use crate::core::transaction::Transaction;
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory query engine
///
/// The dataset lives behind a `RwLock` as an `Arc` snapshot. Readers hold
/// the lock only long enough to clone the `Arc`; the replacement vector is
/// built before the write lock is taken, so the swap itself is a pointer
/// store.
#[derive(Clone)]
pub struct InMemoryQueryEngine {
    dataset: Arc<RwLock<Arc<Vec<Transaction>>>>,
}

impl InMemoryQueryEngine {
    /// Create an engine with an empty dataset
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create an engine seeded with `records`
    pub fn with_records(records: Vec<Transaction>) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(Arc::new(records))),
        }
    }

    fn current(&self) -> DashResult<Arc<Vec<Transaction>>> {
        let guard = self
            .dataset
            .read()
            .map_err(|e| DashError::Internal(format!("Failed to acquire read lock: {}", e)))?;
        Ok(Arc::clone(&guard))
    }
}

impl Default for InMemoryQueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionService for InMemoryQueryEngine {
    async fn replace_dataset(&self, records: Vec<Transaction>) -> DashResult<()> {
        let count = records.len();
        let next = Arc::new(records);

        let mut guard = self
            .dataset
            .write()
            .map_err(|e| DashError::Internal(format!("Failed to acquire write lock: {}", e)))?;
        *guard = next;
        drop(guard);

        tracing::info!(records = count, "Dataset replaced");
        Ok(())
    }

    async fn query(
        &self,
        filter: &FilterSpec,
        sort: &SortSpec,
        page: &PageSpec,
    ) -> DashResult<ResultPage> {
        page.validate()?;

        let snapshot = self.current()?;
        let mut matched = filter.apply(&snapshot);
        sort.sort(&mut matched);

        let total = matched.len();
        let data: Vec<Transaction> = matched
            .into_iter()
            .skip(page.offset())
            .take(page.page_size)
            .cloned()
            .collect();

        tracing::debug!(
            dataset = snapshot.len(),
            matched = total,
            returned = data.len(),
            page = page.page,
            sort = %sort.field,
            "Query evaluated"
        );

        Ok(ResultPage {
            data,
            pagination: PaginationMeta::new(page.page, page.page_size, total),
        })
    }

    async fn filtered_stats(&self, filter: &FilterSpec) -> DashResult<SummaryStats> {
        let snapshot = self.current()?;
        Ok(filter.apply(&snapshot).into_iter().collect())
    }

    async fn snapshot(&self) -> DashResult<Arc<Vec<Transaction>>> {
        self.current()
    }
}
