//! Shared fixtures for the integration tests

#![allow(dead_code)]

use salesboard::prelude::*;

/// A baseline record; tests override the fields they care about
pub fn txn(id: &str) -> Transaction {
    Transaction {
        transaction_id: id.to_string(),
        date: "2024-03-10T09:00:00Z".parse().unwrap(),
        customer_id: format!("CUST-{id}"),
        customer_name: "Rohan Gupta".to_string(),
        phone_number: "+91 8000000000".to_string(),
        gender: "Male".to_string(),
        age: 35,
        customer_region: "East".to_string(),
        customer_type: "New".to_string(),
        product_id: format!("PROD-{id}"),
        product_name: "Sony Product".to_string(),
        brand: "Sony".to_string(),
        product_category: "Electronics".to_string(),
        tags: vec!["New".to_string()],
        quantity: 1,
        price_per_unit: 1000.0,
        discount_percentage: 0.0,
        total_amount: 1000.0,
        final_amount: 1000.0,
        payment_method: "UPI".to_string(),
        order_status: "Completed".to_string(),
        delivery_type: "Standard".to_string(),
        store_id: "STORE2".to_string(),
        store_location: "East".to_string(),
        salesperson_id: "EMP120".to_string(),
        employee_name: "Rachel Green".to_string(),
    }
}

/// A small, hand-checkable dataset
///
/// | id | name         | phone           | region | gender | age | category    | tags              | qty | total | final | pay         | date       |
/// |----|--------------|-----------------|--------|--------|-----|-------------|-------------------|-----|-------|-------|-------------|------------|
/// | t1 | Neha Sharma  | +91 9876543210  | North  | Female | 24  | Clothing    | Sale, New         | 2   | 2000  | 1800  | Credit Card | 2024-01-05 |
/// | t2 | Amit Verma   | +91 9123456789  | South  | Male   | 41  | Electronics | Premium           | 1   | 50000 | 45000 | UPI         | 2024-02-14 |
/// | t3 | neha kapoor  | +91 7000098765  | North  | Female | 33  | Footwear    | Clearance         | 3   | 4500  | 4500  | Cash        | 2024-05-01 |
/// | t4 | Vikram Singh | +91 8888888888  | West   | Male   | 58  | Clothing    | (none)            | 5   | 2500  | 2250  | Credit Card | 2024-05-02 |
pub fn dataset() -> Vec<Transaction> {
    let mut t1 = txn("t1");
    t1.customer_name = "Neha Sharma".to_string();
    t1.phone_number = "+91 9876543210".to_string();
    t1.customer_region = "North".to_string();
    t1.gender = "Female".to_string();
    t1.age = 24;
    t1.product_category = "Clothing".to_string();
    t1.tags = vec!["Sale".to_string(), "New".to_string()];
    t1.quantity = 2;
    t1.total_amount = 2000.0;
    t1.final_amount = 1800.0;
    t1.payment_method = "Credit Card".to_string();
    t1.date = "2024-01-05T10:00:00Z".parse().unwrap();

    let mut t2 = txn("t2");
    t2.customer_name = "Amit Verma".to_string();
    t2.phone_number = "+91 9123456789".to_string();
    t2.customer_region = "South".to_string();
    t2.age = 41;
    t2.tags = vec!["Premium".to_string()];
    t2.total_amount = 50000.0;
    t2.final_amount = 45000.0;
    t2.date = "2024-02-14T18:30:00Z".parse().unwrap();

    let mut t3 = txn("t3");
    t3.customer_name = "neha kapoor".to_string();
    t3.phone_number = "+91 7000098765".to_string();
    t3.customer_region = "North".to_string();
    t3.gender = "Female".to_string();
    t3.age = 33;
    t3.product_category = "Footwear".to_string();
    t3.tags = vec!["Clearance".to_string()];
    t3.quantity = 3;
    t3.total_amount = 4500.0;
    t3.final_amount = 4500.0;
    t3.payment_method = "Cash".to_string();
    t3.date = "2024-05-01T23:59:59.998Z".parse().unwrap();

    let mut t4 = txn("t4");
    t4.customer_name = "Vikram Singh".to_string();
    t4.phone_number = "+91 8888888888".to_string();
    t4.customer_region = "West".to_string();
    t4.age = 58;
    t4.product_category = "Clothing".to_string();
    t4.tags = Vec::new();
    t4.quantity = 5;
    t4.total_amount = 2500.0;
    t4.final_amount = 2250.0;
    t4.payment_method = "Credit Card".to_string();
    t4.date = "2024-05-02T00:00:00Z".parse().unwrap();

    vec![t1, t2, t3, t4]
}

pub fn ids(page: &ResultPage) -> Vec<&str> {
    page.data.iter().map(|t| t.transaction_id.as_str()).collect()
}
