//! Service trait for the transaction query engine

use crate::core::error::DashResult;
use crate::core::filter::FilterSpec;
use crate::core::query::{PageSpec, ResultPage};
use crate::core::sort::SortSpec;
use crate::core::stats::SummaryStats;
use crate::core::transaction::Transaction;
use async_trait::async_trait;
use std::sync::Arc;

/// Service trait for browsing a transaction dataset
///
/// Implementations own one dataset that is only ever replaced wholesale.
/// Every query runs against a single complete snapshot of it, so a
/// concurrent [`replace_dataset`](Self::replace_dataset) is observed either
/// entirely or not at all.
#[async_trait]
pub trait TransactionService: Send + Sync {
    /// Swap the current dataset for `records`
    ///
    /// No validation or merging: duplicates and inconsistent amounts are
    /// accepted as-is.
    async fn replace_dataset(&self, records: Vec<Transaction>) -> DashResult<()>;

    /// Filter, sort and paginate the current dataset
    async fn query(
        &self,
        filter: &FilterSpec,
        sort: &SortSpec,
        page: &PageSpec,
    ) -> DashResult<ResultPage>;

    /// Summary metrics over every record matching `filter`
    async fn filtered_stats(&self, filter: &FilterSpec) -> DashResult<SummaryStats>;

    /// Handle on the current snapshot
    async fn snapshot(&self) -> DashResult<Arc<Vec<Transaction>>>;

    /// Number of records in the current snapshot
    async fn len(&self) -> DashResult<usize> {
        Ok(self.snapshot().await?.len())
    }

    async fn is_empty(&self) -> DashResult<bool> {
        Ok(self.len().await? == 0)
    }
}
