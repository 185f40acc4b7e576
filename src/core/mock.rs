//! Mock transaction generator and the catalogue of filter choices

use crate::core::transaction::Transaction;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

pub const REGIONS: &[&str] = &["North", "South", "East", "West", "Central"];
pub const GENDERS: &[&str] = &["Male", "Female"];
pub const CATEGORIES: &[&str] = &[
    "Clothing",
    "Electronics",
    "Home & Decor",
    "Footwear",
    "Accessories",
    "Beauty",
];
pub const PAYMENT_METHODS: &[&str] = &["Credit Card", "Debit Card", "UPI", "Cash", "Net Banking"];
pub const TAGS: &[&str] = &[
    "Sale",
    "New",
    "Clearance",
    "Premium",
    "Seasonal",
    "Limited",
    "Best Seller",
    "Trending",
];

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Neha", "Rohan", "Priya", "Vikram", "Sneha", "Amit", "Ananya", "Rahul", "Ishita",
    "Arjun", "Kavya",
];
const LAST_NAMES: &[&str] = &[
    "Sharma", "Yadav", "Verma", "Gupta", "Singh", "Patel", "Kumar", "Das", "Reddy", "Mehta",
    "Joshi", "Malhotra",
];
const BRANDS: &[&str] = &[
    "Nike", "Samsung", "Zara", "Apple", "Adidas", "H&M", "Sony", "Puma", "LG", "Levis",
];
const EMPLOYEES: &[&str] = &[
    "Harsh Agrawal",
    "Pooja Singh",
    "Rajesh Koothrappali",
    "Monica Geller",
    "Chandler Bing",
    "Joey Tribbiani",
    "Rachel Green",
];
const CUSTOMER_TYPES: &[&str] = &["Regular", "Premium", "New"];
const ORDER_STATUSES: &[&str] = &["Completed", "Pending", "Returned"];
const DELIVERY_TYPES: &[&str] = &["Standard", "Express", "Store Pickup"];

/// Filter choices offered by the dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCatalog {
    pub regions: Vec<&'static str>,
    pub genders: Vec<&'static str>,
    pub categories: Vec<&'static str>,
    pub tags: Vec<&'static str>,
    pub payment_methods: Vec<&'static str>,
}

pub fn catalog() -> FilterCatalog {
    FilterCatalog {
        regions: REGIONS.to_vec(),
        genders: GENDERS.to_vec(),
        categories: CATEGORIES.to_vec(),
        tags: TAGS.to_vec(),
        payment_methods: PAYMENT_METHODS.to_vec(),
    }
}

/// Generate `count` plausible transactions, reproducible for a given `seed`
///
/// Dates fall between 2023-01-01 and 2024-12-31 UTC.
pub fn generate(count: usize, seed: u64) -> Vec<Transaction> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).single().unwrap_or_default();
    let span_secs = Duration::days(730).num_seconds();

    (0..count)
        .map(|i| {
            let price = rng.gen_range(500..=50_000) as f64;
            let quantity: u32 = rng.gen_range(1..=5);
            let discount = rng.gen_range(0..=20) as f64;
            let total = price * f64::from(quantity);
            let final_amount = (total - total * (discount / 100.0)).floor();

            let tag_count = rng.gen_range(1..=2);
            let tags: Vec<String> = TAGS
                .choose_multiple(&mut rng, tag_count)
                .map(|t| t.to_string())
                .collect();

            let date: DateTime<Utc> = start + Duration::seconds(rng.gen_range(0..span_secs));

            Transaction {
                transaction_id: format!("TRX{}", 100_000 + i),
                date,
                customer_id: format!("CUST{}", 2_000 + i),
                customer_name: format!("{} {}", pick(&mut rng, FIRST_NAMES), pick(&mut rng, LAST_NAMES)),
                phone_number: format!("+91 {}", rng.gen_range(7_000_000_000u64..=9_999_999_999)),
                gender: pick(&mut rng, GENDERS),
                age: rng.gen_range(18..=70),
                customer_region: pick(&mut rng, REGIONS),
                customer_type: pick(&mut rng, CUSTOMER_TYPES),
                product_id: format!("PROD{}", 5_000 + i),
                product_name: format!("{} Product {}", pick(&mut rng, BRANDS), i),
                brand: pick(&mut rng, BRANDS),
                product_category: pick(&mut rng, CATEGORIES),
                tags,
                quantity,
                price_per_unit: price,
                discount_percentage: discount,
                total_amount: total,
                final_amount,
                payment_method: pick(&mut rng, PAYMENT_METHODS),
                order_status: pick(&mut rng, ORDER_STATUSES),
                delivery_type: pick(&mut rng, DELIVERY_TYPES),
                store_id: format!("STORE{}", rng.gen_range(1..=10)),
                store_location: pick(&mut rng, REGIONS),
                salesperson_id: format!("EMP{}", rng.gen_range(100..=200)),
                employee_name: pick(&mut rng, EMPLOYEES),
            }
        })
        .collect()
}

fn pick(rng: &mut StdRng, choices: &[&str]) -> String {
    choices.choose(rng).copied().unwrap_or_default().to_string()
}
