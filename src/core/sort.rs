//! Sort order and typed comparators

use crate::core::error::QueryError;
use crate::core::transaction::Transaction;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::str::FromStr;

/// Fields a result set can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Date,
    Quantity,
    CustomerName,
    TotalAmount,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Date,
        SortField::Quantity,
        SortField::CustomerName,
        SortField::TotalAmount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Quantity => "quantity",
            SortField::CustomerName => "customerName",
            SortField::TotalAmount => "totalAmount",
        }
    }

    /// Ascending comparison of two records on this field
    pub fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Quantity => a.quantity.cmp(&b.quantity),
            SortField::CustomerName => a
                .customer_name
                .to_lowercase()
                .cmp(&b.customer_name.to_lowercase()),
            SortField::TotalAmount => a.total_amount.total_cmp(&b.total_amount),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = QueryError;

    /// Accepts the camelCase wire names as well as snake_case spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "date" => Ok(SortField::Date),
            "quantity" => Ok(SortField::Quantity),
            "customerName" | "customer_name" => Ok(SortField::CustomerName),
            "totalAmount" | "total_amount" => Ok(SortField::TotalAmount),
            other => Err(QueryError::UnknownSortField {
                field: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Apply the direction to an ascending ordering
    ///
    /// Equal stays equal, so ties keep their input order either way.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(QueryError::UnknownSortDirection {
                direction: s.to_string(),
            }),
        }
    }
}

/// Sort field and direction; defaults to newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Stable in-place sort of a filtered view
    ///
    /// Name keys are lowercased once per record rather than once per comparison.
    pub fn sort(&self, records: &mut [&Transaction]) {
        match (self.field, self.direction) {
            (SortField::CustomerName, SortDirection::Asc) => {
                records.sort_by_cached_key(|t| t.customer_name.to_lowercase())
            }
            (SortField::CustomerName, SortDirection::Desc) => {
                records.sort_by_cached_key(|t| Reverse(t.customer_name.to_lowercase()))
            }
            _ => records.sort_by(|a, b| self.direction.apply(self.field.compare(a, b))),
        }
    }
}

impl FromStr for SortSpec {
    type Err = QueryError;

    /// Parse `field` or `field:direction`; a bare field sorts ascending
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((field, direction)) => Ok(Self::new(field.parse()?, direction.parse()?)),
            None => Ok(Self::new(s.parse()?, SortDirection::Asc)),
        }
    }
}
