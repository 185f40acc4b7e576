//! Summary metrics over a set of transactions

use crate::core::transaction::Transaction;
use serde::{Deserialize, Serialize};

/// Units sold, revenue and discount granted
///
/// The dashboard header shows these for the page on screen
/// ([`ResultPage::page_stats`](crate::core::query::ResultPage::page_stats)).
/// Totals over every matching record are available from
/// [`TransactionService::filtered_stats`](crate::core::service::TransactionService::filtered_stats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Sum of `quantity`
    pub total_units: u64,
    /// Sum of `finalAmount`
    pub total_amount: f64,
    /// Sum of `totalAmount - finalAmount`
    pub total_discount: f64,
}

impl SummaryStats {
    pub fn add(&mut self, txn: &Transaction) {
        self.total_units += u64::from(txn.quantity);
        self.total_amount += txn.final_amount;
        self.total_discount += txn.discount_amount();
    }
}

impl<'a> FromIterator<&'a Transaction> for SummaryStats {
    fn from_iter<I: IntoIterator<Item = &'a Transaction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut stats, txn| {
            stats.add(txn);
            stats
        })
    }
}
