//! Query parameters, pagination and result pages

use crate::core::error::QueryError;
use crate::core::filter::{AgeRange, DateRange, FilterSpec};
use crate::core::sort::SortSpec;
use crate::core::stats::SummaryStats;
use crate::core::transaction::Transaction;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rows per page when the caller does not ask for a size
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Which slice of the sorted result to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpec {
    /// Page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageSpec {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// Reject page sizes that would divide by zero and page numbers below 1
    ///
    /// A page beyond the last one is valid and yields an empty slice.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.page_size == 0 {
            return Err(QueryError::InvalidPageSize { size: 0 });
        }
        if self.page == 0 {
            return Err(QueryError::InvalidPage { page: 0 });
        }
        Ok(())
    }

    /// Index of the first row on this page
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Build a page spec from raw, possibly negative, caller input
    pub fn from_raw(
        page: Option<i64>,
        limit: Option<i64>,
        default_limit: usize,
        max_limit: usize,
    ) -> Result<Self, QueryError> {
        let page = match page {
            None => 1,
            Some(p) if p >= 1 => p as usize,
            Some(p) => return Err(QueryError::InvalidPage { page: p }),
        };
        let page_size = match limit {
            None => default_limit,
            Some(l) if l >= 1 => l as usize,
            Some(l) => return Err(QueryError::InvalidPageSize { size: l }),
        };
        if page_size > max_limit {
            return Err(QueryError::PageSizeTooLarge {
                size: page_size,
                max: max_limit,
            });
        }
        Ok(Self::new(page, page_size))
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub current_page: usize,

    /// Number of items per page
    pub items_per_page: usize,

    /// Total number of items (after filters)
    pub total_items: usize,

    /// Total number of pages, never less than 1
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    ///
    /// # Panics
    ///
    /// When `limit` is 0. Callers validate it through [`PageSpec::validate`]
    /// first; it is never rounded up to a usable size.
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        assert!(limit >= 1, "page size must be validated before paginating");
        let total_pages = total.div_ceil(limit).max(1);
        let start = page.saturating_sub(1).saturating_mul(limit);

        Self {
            current_page: page,
            items_per_page: limit,
            total_items: total,
            total_pages,
            has_next: start.saturating_add(limit) < total,
            has_prev: page > 1,
        }
    }
}

/// One page of query results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    /// The paginated data
    pub data: Vec<Transaction>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl ResultPage {
    /// Metrics over the rows on this page only
    pub fn page_stats(&self) -> SummaryStats {
        self.data.iter().collect()
    }
}

/// Query parameters for the list and stats endpoints
///
/// Numbers are taken as raw strings so that malformed input surfaces as a
/// typed [`QueryError`] instead of a generic extractor rejection. Set-valued
/// filters are comma separated.
///
/// # Example
/// ```text
/// GET /transactions?page=2&limit=10
/// GET /transactions?search=sharma&regions=North,South&tags=Sale
/// GET /transactions?ageMin=25&ageMax=40&dateFrom=2024-01-01&dateTo=2024-03-31
/// GET /transactions?sort=totalAmount:desc
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryParams {
    /// Page number (starts at 1)
    pub page: Option<String>,

    /// Number of items per page
    pub limit: Option<String>,

    /// Free-text search over customer name and phone
    pub search: Option<String>,

    pub regions: Option<String>,
    pub genders: Option<String>,
    pub categories: Option<String>,
    pub tags: Option<String>,
    pub payment_methods: Option<String>,

    pub age_min: Option<String>,
    pub age_max: Option<String>,

    /// `YYYY-MM-DD`, inclusive
    pub date_from: Option<String>,

    /// `YYYY-MM-DD`, inclusive of the whole day
    pub date_to: Option<String>,

    /// `field` or `field:asc|desc`
    pub sort: Option<String>,
}

impl QueryParams {
    pub fn page_spec(&self, default_limit: usize, max_limit: usize) -> Result<PageSpec, QueryError> {
        PageSpec::from_raw(
            parse_number("page", self.page.as_deref())?,
            parse_number("limit", self.limit.as_deref())?,
            default_limit,
            max_limit,
        )
    }

    /// Absent sort means newest first
    pub fn sort_spec(&self) -> Result<SortSpec, QueryError> {
        match self.sort.as_deref().map(str::trim) {
            None | Some("") => Ok(SortSpec::default()),
            Some(raw) => raw.parse(),
        }
    }

    pub fn filter_spec(&self) -> Result<FilterSpec, QueryError> {
        let defaults = AgeRange::default();
        let age_range = AgeRange {
            min: parse_number("ageMin", self.age_min.as_deref())?.unwrap_or(defaults.min),
            max: parse_number("ageMax", self.age_max.as_deref())?.unwrap_or(defaults.max),
        };

        Ok(FilterSpec {
            search_query: self.search.clone().unwrap_or_default(),
            regions: split_list(self.regions.as_deref()),
            genders: split_list(self.genders.as_deref()),
            categories: split_list(self.categories.as_deref()),
            tags: split_list(self.tags.as_deref()),
            payment_methods: split_list(self.payment_methods.as_deref()),
            age_range,
            date_range: DateRange {
                start: parse_date("dateFrom", self.date_from.as_deref())?,
                end: parse_date("dateTo", self.date_to.as_deref())?,
            },
        })
    }
}

/// JSON body accepted by `POST /transactions/query`
///
/// Sort names and dates stay raw strings until [`QueryRequest::sort_spec`]
/// and [`QueryRequest::filter_spec`] parse them, so a bad value is reported
/// with the same error codes as the query-string endpoint.
///
/// # Example
/// ```text
/// {"filter": {"regions": ["North"], "dateRange": {"start": "2024-01-01", "end": ""}},
///  "sort": {"field": "totalAmount", "direction": "desc"}, "page": 1, "limit": 10}
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QueryRequest {
    pub filter: FilterRequest,
    pub sort: SortRequest,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Filter half of a [`QueryRequest`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterRequest {
    pub search_query: String,
    pub regions: Vec<String>,
    pub genders: Vec<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub payment_methods: Vec<String>,
    pub age_range: AgeRange,
    pub date_range: DateRangeRequest,
}

/// `YYYY-MM-DD` bounds; `""` or absent means unbounded
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DateRangeRequest {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Sort half of a [`QueryRequest`]; missing parts fall back to `date` / `desc`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SortRequest {
    pub field: Option<String>,
    pub direction: Option<String>,
}

impl QueryRequest {
    pub fn page_spec(&self, default_limit: usize, max_limit: usize) -> Result<PageSpec, QueryError> {
        PageSpec::from_raw(self.page, self.limit, default_limit, max_limit)
    }

    pub fn sort_spec(&self) -> Result<SortSpec, QueryError> {
        let defaults = SortSpec::default();
        let field = match self.sort.field.as_deref() {
            Some(raw) => raw.parse()?,
            None => defaults.field,
        };
        let direction = match self.sort.direction.as_deref() {
            Some(raw) => raw.parse()?,
            None => defaults.direction,
        };
        Ok(SortSpec::new(field, direction))
    }

    pub fn filter_spec(&self) -> Result<FilterSpec, QueryError> {
        let filter = &self.filter;
        Ok(FilterSpec {
            search_query: filter.search_query.clone(),
            regions: filter.regions.clone(),
            genders: filter.genders.clone(),
            categories: filter.categories.clone(),
            tags: filter.tags.clone(),
            payment_methods: filter.payment_methods.clone(),
            age_range: filter.age_range,
            date_range: DateRange {
                start: parse_date("dateRange.start", filter.date_range.start.as_deref())?,
                end: parse_date("dateRange.end", filter.date_range.end.as_deref())?,
            },
        })
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

fn parse_number<T: std::str::FromStr>(param: &str, raw: Option<&str>) -> Result<Option<T>, QueryError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| QueryError::InvalidNumber {
                param: param.to_string(),
                value: value.to_string(),
            }),
    }
}

fn parse_date(param: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, QueryError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| QueryError::InvalidDate {
                param: param.to_string(),
                value: value.to_string(),
            }),
    }
}
