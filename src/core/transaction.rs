//! Sales transaction record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single sales transaction
///
/// Records are immutable once ingested. Field values arrive already
/// normalized by the import layer (missing region → "Unknown", unparseable
/// numbers → 0, ...) and are never re-validated by the query engine.
///
/// Closed vocabularies such as `gender`, `customer_type`, `payment_method`,
/// `order_status` and `delivery_type` are kept as plain strings: the engine
/// only ever compares them for equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: String,
    pub date: DateTime<Utc>,

    // Customer
    pub customer_id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub gender: String,
    pub age: u32,
    pub customer_region: String,
    pub customer_type: String,

    // Product
    pub product_id: String,
    pub product_name: String,
    pub brand: String,
    pub product_category: String,
    #[serde(default)]
    pub tags: Vec<String>,

    // Commerce
    pub quantity: u32,
    pub price_per_unit: f64,
    pub discount_percentage: f64,
    pub total_amount: f64,
    pub final_amount: f64,

    // Fulfilment
    pub payment_method: String,
    pub order_status: String,
    pub delivery_type: String,
    pub store_id: String,
    pub store_location: String,
    pub salesperson_id: String,
    pub employee_name: String,
}

impl Transaction {
    /// Amount knocked off the list price
    ///
    /// Not clamped: an inconsistent record (final above total) yields a
    /// negative discount.
    pub fn discount_amount(&self) -> f64 {
        self.total_amount - self.final_amount
    }

    /// Whether any of this record's tags appears in `wanted`
    pub fn has_any_tag(&self, wanted: &[String]) -> bool {
        self.tags.iter().any(|tag| wanted.contains(tag))
    }
}
