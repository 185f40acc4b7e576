//! Filter predicates narrowing the transaction collection
//!
//! Every predicate is independent and AND-combined with the others. An empty
//! set, an empty search string or a default range is a no-op and never
//! excludes a record.

use crate::core::transaction::Transaction;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Lower bound of the age slider
pub const AGE_FLOOR: u32 = 0;

/// Upper bound of the age slider
pub const AGE_CEILING: u32 = 100;

/// Inclusive age bounds
///
/// The default `[0, 100]` means "no age filter", even though a record aged
/// above 100 would technically fall outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl Default for AgeRange {
    fn default() -> Self {
        Self {
            min: AGE_FLOOR,
            max: AGE_CEILING,
        }
    }
}

impl AgeRange {
    pub fn is_active(&self) -> bool {
        self.min > AGE_FLOOR || self.max < AGE_CEILING
    }

    pub fn contains(&self, age: u32) -> bool {
        age >= self.min && age <= self.max
    }
}

/// Inclusive calendar-day bounds, evaluated in UTC
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    #[serde(deserialize_with = "empty_as_none")]
    pub start: Option<NaiveDate>,
    #[serde(deserialize_with = "empty_as_none")]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// First instant of the start day
    pub fn lower_bound(&self) -> Option<DateTime<Utc>> {
        self.start
            .map(|day| day.and_time(NaiveTime::MIN).and_utc())
    }

    /// Last millisecond of the end day (23:59:59.999)
    pub fn upper_bound(&self) -> Option<DateTime<Utc>> {
        self.end.and_then(|day| {
            day.and_hms_milli_opt(23, 59, 59, 999)
                .map(|end_of_day| end_of_day.and_utc())
        })
    }
}

/// Dashboard clients send `""` for an unset date picker
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// The full set of predicates for one query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    /// Matched against customer name (case-insensitive) or phone number
    pub search_query: String,
    pub regions: Vec<String>,
    pub genders: Vec<String>,
    pub categories: Vec<String>,
    /// A record matches when at least one of its tags is listed here
    pub tags: Vec<String>,
    pub payment_methods: Vec<String>,
    pub age_range: AgeRange,
    pub date_range: DateRange,
}

impl FilterSpec {
    /// Whether every predicate is at its no-op default
    pub fn is_empty(&self) -> bool {
        self.search_query.is_empty()
            && self.regions.is_empty()
            && self.genders.is_empty()
            && self.categories.is_empty()
            && self.tags.is_empty()
            && self.payment_methods.is_empty()
            && !self.age_range.is_active()
            && self.date_range.start.is_none()
            && self.date_range.end.is_none()
    }

    /// Select the records satisfying every predicate, preserving input order
    ///
    /// The collection itself is never touched; the returned vector borrows
    /// from it.
    pub fn apply<'a>(&self, records: &'a [Transaction]) -> Vec<&'a Transaction> {
        let compiled = CompiledFilter::new(self);
        records.iter().filter(|txn| compiled.matches(txn)).collect()
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        CompiledFilter::new(self).matches(txn)
    }
}

/// A filter with its per-query work (lowercasing, bound computation) done once
struct CompiledFilter<'f> {
    spec: &'f FilterSpec,
    query: Option<String>,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
}

impl<'f> CompiledFilter<'f> {
    fn new(spec: &'f FilterSpec) -> Self {
        let query = (!spec.search_query.is_empty()).then(|| spec.search_query.to_lowercase());
        Self {
            spec,
            query,
            from: spec.date_range.lower_bound(),
            to: spec.date_range.upper_bound(),
        }
    }

    fn matches(&self, txn: &Transaction) -> bool {
        let spec = self.spec;

        if let Some(query) = &self.query {
            // Phone numbers are matched literally, only the name is case-folded
            let by_name = txn.customer_name.to_lowercase().contains(query.as_str());
            if !by_name && !txn.phone_number.contains(query.as_str()) {
                return false;
            }
        }

        if !member_of(&spec.regions, &txn.customer_region)
            || !member_of(&spec.genders, &txn.gender)
            || !member_of(&spec.categories, &txn.product_category)
        {
            return false;
        }

        if !spec.tags.is_empty() && !txn.has_any_tag(&spec.tags) {
            return false;
        }

        if !member_of(&spec.payment_methods, &txn.payment_method) {
            return false;
        }

        if spec.age_range.is_active() && !spec.age_range.contains(txn.age) {
            return false;
        }

        if self.from.is_some_and(|from| txn.date < from) {
            return false;
        }

        !self.to.is_some_and(|to| txn.date > to)
    }
}

fn member_of(set: &[String], value: &str) -> bool {
    set.is_empty() || set.iter().any(|candidate| candidate == value)
}
