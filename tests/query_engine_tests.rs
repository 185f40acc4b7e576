//! Behavioural tests for the in-memory query engine
//!
//! These run against the small table in `common::dataset()`.

mod common;

use common::{dataset, ids, txn};
use salesboard::prelude::*;
use std::sync::Arc;

fn engine() -> InMemoryQueryEngine {
    InMemoryQueryEngine::with_records(dataset())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn date_asc() -> SortSpec {
    SortSpec::new(SortField::Date, SortDirection::Asc)
}

async fn run(engine: &InMemoryQueryEngine, filter: FilterSpec) -> ResultPage {
    engine
        .query(&filter, &date_asc(), &PageSpec::new(1, 50))
        .await
        .unwrap()
}

// =============================================================================
// Filter stage
// =============================================================================

mod filtering {
    use super::*;

    #[tokio::test]
    async fn test_default_filter_returns_everything() {
        let page = engine()
            .query(&FilterSpec::default(), &SortSpec::default(), &PageSpec::default())
            .await
            .unwrap();

        // Newest first by default
        assert_eq!(ids(&page), vec!["t4", "t3", "t2", "t1"]);
        assert_eq!(page.pagination.total_items, 4);
    }

    #[tokio::test]
    async fn test_explicit_full_ranges_are_noops() {
        let filter = FilterSpec {
            age_range: AgeRange { min: 0, max: 100 },
            date_range: DateRange {
                start: NaiveDate::from_ymd_opt(2000, 1, 1),
                end: NaiveDate::from_ymd_opt(2100, 1, 1),
            },
            ..Default::default()
        };
        assert_eq!(run(&engine(), filter).await.pagination.total_items, 4);
    }

    #[tokio::test]
    async fn test_search_by_name_ignores_case() {
        let filter = FilterSpec {
            search_query: "NEHA".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&run(&engine(), filter).await), vec!["t1", "t3"]);
    }

    #[tokio::test]
    async fn test_search_by_phone_substring() {
        let filter = FilterSpec {
            search_query: "98765".to_string(),
            ..Default::default()
        };
        let page = run(&engine(), filter).await;
        assert_eq!(ids(&page), vec!["t1", "t3"]);
        assert!(page.data.iter().all(|t| t.phone_number.contains("98765")));
    }

    #[tokio::test]
    async fn test_search_without_match_is_empty_not_error() {
        let filter = FilterSpec {
            search_query: "nobody".to_string(),
            ..Default::default()
        };
        let page = run(&engine(), filter).await;
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_items, 0);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[tokio::test]
    async fn test_region_gender_category_combine_with_and() {
        let filter = FilterSpec {
            regions: strings(&["North"]),
            genders: strings(&["Female"]),
            categories: strings(&["Clothing"]),
            ..Default::default()
        };
        assert_eq!(ids(&run(&engine(), filter).await), vec!["t1"]);
    }

    #[tokio::test]
    async fn test_payment_method_membership() {
        let filter = FilterSpec {
            payment_methods: strings(&["Credit Card", "Net Banking"]),
            ..Default::default()
        };
        assert_eq!(ids(&run(&engine(), filter).await), vec!["t1", "t4"]);
    }

    #[tokio::test]
    async fn test_tags_match_on_any_overlap() {
        let overlapping = FilterSpec {
            tags: strings(&["New", "Clearance"]),
            ..Default::default()
        };
        assert_eq!(ids(&run(&engine(), overlapping).await), vec!["t1", "t3"]);

        let narrower = FilterSpec {
            tags: strings(&["Clearance", "Trending"]),
            ..Default::default()
        };
        assert_eq!(ids(&run(&engine(), narrower).await), vec!["t3"]);
    }

    #[tokio::test]
    async fn test_age_range_is_inclusive() {
        let filter = FilterSpec {
            age_range: AgeRange { min: 33, max: 41 },
            ..Default::default()
        };
        assert_eq!(ids(&run(&engine(), filter).await), vec!["t2", "t3"]);
    }

    #[tokio::test]
    async fn test_date_end_includes_last_millisecond_of_day() {
        let filter = FilterSpec {
            date_range: DateRange {
                start: None,
                end: NaiveDate::from_ymd_opt(2024, 5, 1),
            },
            ..Default::default()
        };
        assert_eq!(ids(&run(&engine(), filter).await), vec!["t1", "t2", "t3"]);
    }

    #[tokio::test]
    async fn test_date_range_single_day() {
        let filter = FilterSpec {
            date_range: DateRange {
                start: NaiveDate::from_ymd_opt(2024, 5, 2),
                end: NaiveDate::from_ymd_opt(2024, 5, 2),
            },
            ..Default::default()
        };
        assert_eq!(ids(&run(&engine(), filter).await), vec!["t4"]);
    }
}

// =============================================================================
// Sort stage
// =============================================================================

mod sorting {
    use super::*;

    async fn sorted(field: SortField, direction: SortDirection) -> Vec<String> {
        let page = engine()
            .query(
                &FilterSpec::default(),
                &SortSpec::new(field, direction),
                &PageSpec::new(1, 10),
            )
            .await
            .unwrap();
        ids(&page).into_iter().map(String::from).collect()
    }

    #[tokio::test]
    async fn test_customer_name_is_case_insensitive() {
        assert_eq!(
            sorted(SortField::CustomerName, SortDirection::Asc).await,
            vec!["t2", "t3", "t1", "t4"]
        );
    }

    #[tokio::test]
    async fn test_quantity_descending() {
        assert_eq!(
            sorted(SortField::Quantity, SortDirection::Desc).await,
            vec!["t4", "t3", "t1", "t2"]
        );
    }

    #[tokio::test]
    async fn test_total_amount_ascending() {
        assert_eq!(
            sorted(SortField::TotalAmount, SortDirection::Asc).await,
            vec!["t1", "t4", "t3", "t2"]
        );
    }

    #[tokio::test]
    async fn test_ties_keep_collection_order_in_both_directions() {
        let engine = InMemoryQueryEngine::with_records(vec![txn("a"), txn("b"), txn("c")]);

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            for field in SortField::ALL {
                let page = engine
                    .query(
                        &FilterSpec::default(),
                        &SortSpec::new(field, direction),
                        &PageSpec::new(1, 10),
                    )
                    .await
                    .unwrap();
                assert_eq!(ids(&page), vec!["a", "b", "c"], "{field} {direction:?}");
            }
        }
    }

    #[tokio::test]
    async fn test_repeated_queries_are_identical() {
        let engine = InMemoryQueryEngine::with_records(mock::generate(200, 9));
        let filter = FilterSpec {
            regions: strings(&["North", "East"]),
            ..Default::default()
        };
        let sort = SortSpec::new(SortField::Quantity, SortDirection::Desc);
        let page = PageSpec::new(2, 7);

        let first = engine.query(&filter, &sort, &page).await.unwrap();
        let second = engine.query(&filter, &sort, &page).await.unwrap();
        assert_eq!(first, second);
    }
}

// =============================================================================
// Paginate stage
// =============================================================================

mod paginating {
    use super::*;

    fn priced() -> InMemoryQueryEngine {
        let records = [100.0, 200.0, 300.0]
            .into_iter()
            .enumerate()
            .map(|(i, amount)| {
                let mut t = txn(&format!("p{i}"));
                t.total_amount = amount;
                t
            })
            .collect();
        InMemoryQueryEngine::with_records(records)
    }

    fn amounts(page: &ResultPage) -> Vec<f64> {
        page.data.iter().map(|t| t.total_amount).collect()
    }

    #[tokio::test]
    async fn test_two_per_page_by_amount_descending() {
        let engine = priced();
        let sort = SortSpec::new(SortField::TotalAmount, SortDirection::Desc);

        let first = engine
            .query(&FilterSpec::default(), &sort, &PageSpec::new(1, 2))
            .await
            .unwrap();
        assert_eq!(amounts(&first), vec![300.0, 200.0]);
        assert_eq!(first.pagination.total_items, 3);
        assert_eq!(first.pagination.total_pages, 2);

        let second = engine
            .query(&FilterSpec::default(), &sort, &PageSpec::new(2, 2))
            .await
            .unwrap();
        assert_eq!(amounts(&second), vec![100.0]);
        assert_eq!(second.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty_but_counted() {
        let page = priced()
            .query(&FilterSpec::default(), &SortSpec::default(), &PageSpec::new(5, 2))
            .await
            .unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.current_page, 5);
        assert_eq!(page.pagination.total_items, 3);
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn test_empty_dataset_has_one_page() {
        let engine = InMemoryQueryEngine::new();
        for field in SortField::ALL {
            let page = engine
                .query(
                    &FilterSpec {
                        search_query: "x".to_string(),
                        ..Default::default()
                    },
                    &SortSpec::new(field, SortDirection::Asc),
                    &PageSpec::new(3, 25),
                )
                .await
                .unwrap();
            assert!(page.data.is_empty());
            assert_eq!(page.pagination.total_items, 0);
            assert_eq!(page.pagination.total_pages, 1);
        }
    }

    #[tokio::test]
    async fn test_invalid_page_arguments_are_rejected() {
        let engine = priced();

        let err = engine
            .query(&FilterSpec::default(), &SortSpec::default(), &PageSpec::new(1, 0))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PAGE_SIZE");

        let err = engine
            .query(&FilterSpec::default(), &SortSpec::default(), &PageSpec::new(0, 10))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PAGE");
    }
}

// =============================================================================
// Statistics
// =============================================================================

mod statistics {
    use super::*;

    #[tokio::test]
    async fn test_page_stats_only_cover_the_page() {
        let engine = engine();
        let page = engine
            .query(
                &FilterSpec::default(),
                &SortSpec::new(SortField::TotalAmount, SortDirection::Desc),
                &PageSpec::new(1, 2),
            )
            .await
            .unwrap();

        // t2 (50000/45000, qty 1) and t3 (4500/4500, qty 3)
        let stats = page.page_stats();
        assert_eq!(stats.total_units, 4);
        assert_eq!(stats.total_amount, 49500.0);
        assert_eq!(stats.total_discount, 5000.0);
    }

    #[tokio::test]
    async fn test_filtered_stats_cover_every_match() {
        let filter = FilterSpec {
            regions: strings(&["North"]),
            ..Default::default()
        };
        let stats = engine().filtered_stats(&filter).await.unwrap();
        assert_eq!(stats.total_units, 5);
        assert_eq!(stats.total_amount, 6300.0);
        assert_eq!(stats.total_discount, 200.0);
    }
}

// =============================================================================
// Dataset replacement
// =============================================================================

mod replacement {
    use super::*;

    #[tokio::test]
    async fn test_replace_then_query_sees_new_data() {
        let engine = engine();
        engine
            .replace_dataset(vec![txn("fresh")])
            .await
            .unwrap();

        let page = engine
            .query(&FilterSpec::default(), &SortSpec::default(), &PageSpec::default())
            .await
            .unwrap();
        assert_eq!(ids(&page), vec!["fresh"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_queries_never_observe_a_mixed_dataset() {
        let small: Vec<Transaction> = (0..10)
            .map(|i| {
                let mut t = txn(&format!("s{i}"));
                t.customer_region = "Small".to_string();
                t
            })
            .collect();
        let large: Vec<Transaction> = (0..40)
            .map(|i| {
                let mut t = txn(&format!("l{i}"));
                t.customer_region = "Large".to_string();
                t
            })
            .collect();

        let engine: Arc<dyn TransactionService> =
            Arc::new(InMemoryQueryEngine::with_records(small.clone()));

        let writer = {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move {
                for round in 0..200 {
                    let next = if round % 2 == 0 { large.clone() } else { small.clone() };
                    engine.replace_dataset(next).await.unwrap();
                    tokio::task::yield_now().await;
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                tokio::spawn(async move {
                    for _ in 0..200 {
                        let page = engine
                            .query(&FilterSpec::default(), &SortSpec::default(), &PageSpec::new(1, 100))
                            .await
                            .unwrap();
                        let total = page.pagination.total_items;
                        assert!(total == 10 || total == 40, "torn read: {total}");
                        let region = &page.data[0].customer_region;
                        assert!(page.data.iter().all(|t| &t.customer_region == region));
                        assert_eq!(page.data.len(), total);
                        tokio::task::yield_now().await;
                    }
                })
            })
            .collect();

        writer.await.unwrap();
        for reader in readers {
            reader.await.unwrap();
        }
    }
}
