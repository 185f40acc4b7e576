//! Standalone demo: drive the query engine directly, without HTTP

use salesboard::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let engine = InMemoryQueryEngine::new();
    engine.replace_dataset(mock::generate(500, 42)).await?;

    // Newest first, ten per page, like the dashboard's first load
    let page = engine
        .query(&FilterSpec::default(), &SortSpec::default(), &PageSpec::default())
        .await?;
    print_page("All transactions", &page);

    let filter = FilterSpec {
        regions: vec!["North".to_string(), "South".to_string()],
        tags: vec!["Sale".to_string(), "Clearance".to_string()],
        age_range: AgeRange { min: 25, max: 45 },
        ..Default::default()
    };
    let sort = SortSpec::new(SortField::TotalAmount, SortDirection::Desc);
    let page = engine.query(&filter, &sort, &PageSpec::new(1, 5)).await?;
    print_page("North/South, on sale, aged 25-45, by amount", &page);

    let totals = engine.filtered_stats(&filter).await?;
    println!(
        "Across all {} matches: {} units, {:.0} revenue, {:.0} discount",
        page.pagination.total_items, totals.total_units, totals.total_amount, totals.total_discount
    );

    Ok(())
}

fn print_page(title: &str, page: &ResultPage) {
    let meta = &page.pagination;
    println!(
        "\n{} (page {}/{}, {} matches)",
        title, meta.current_page, meta.total_pages, meta.total_items
    );
    for txn in &page.data {
        println!(
            "  {}  {}  {:<18} {:<12} {:>9.0}",
            txn.transaction_id,
            txn.date.format("%Y-%m-%d"),
            txn.customer_name,
            txn.customer_region,
            txn.total_amount
        );
    }
    let stats = page.page_stats();
    println!(
        "  page totals: {} units, {:.0} revenue, {:.0} discount",
        stats.total_units, stats.total_amount, stats.total_discount
    );
}
