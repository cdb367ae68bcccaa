//! Built-in sample dataset.
//!
//! Five products, two suppliers, one customer, and stock batches received at
//! each supplier's list price. Quantities follow a fixed pattern so every run
//! (and every test) sees the same numbers for a given `now`.

use chrono::{DateTime, Duration, Utc};

use stockboard_core::{
    CustomerId, DomainResult, IssueId, OrderId, OrderPositionId, ProductId, SupplierId,
};
use stockboard_inventory::ProductStock;
use stockboard_issues::{Issue, IssueSeverity};
use stockboard_orders::{OrderPosition, PurchaseOrder, SalesOrder};
use stockboard_parties::{Customer, ProductSupplier, Supplier};
use stockboard_products::Product;

use crate::seed::Dataset;

/// Rounds of the batch generator (one candidate batch per round).
const STOCK_ROUNDS: usize = 100;

const PRODUCTS: [(&str, &str); 5] = [
    ("SKU_001", "iPhone 14"),
    ("SKU_002", "iPhone 14 PRO"),
    ("SKU_003", "MacBook AIR M2"),
    ("SKU_004", "MacBook M2"),
    ("SKU_005", "MacBook PRO M2"),
];

const SUPPLIERS: [(&str, &str); 2] = [("sup_01", "Apple"), ("sup_02", "JB-HIFI")];

/// (product index, supplier index, price, lead time in days)
const PRICE_LIST: [(usize, usize, u64, u32); 9] = [
    (0, 0, 1300, 3),
    (0, 1, 1500, 1),
    (1, 0, 1600, 3),
    (2, 0, 1800, 3),
    (3, 0, 2100, 3),
    (4, 0, 3000, 3),
    (2, 1, 1500, 8),
    (3, 1, 1900, 8),
    (4, 1, 28, 8),
];

pub fn sample_dataset(now: DateTime<Utc>) -> DomainResult<Dataset> {
    let products = PRODUCTS
        .iter()
        .map(|(id, name)| -> DomainResult<Product> {
            Product::new(ProductId::new(*id)?, *name, 10, 100)
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let suppliers = SUPPLIERS
        .iter()
        .map(|(id, name)| -> DomainResult<Supplier> { Supplier::new(SupplierId::new(*id)?, *name) })
        .collect::<DomainResult<Vec<_>>>()?;

    let customers = vec![Customer::new(
        CustomerId::new("cus_1")?,
        "Company XYZ",
        Some("Brisbane".to_string()),
    )?];

    let product_suppliers = PRICE_LIST
        .iter()
        .map(|&(p, s, price, lead_time)| {
            ProductSupplier::new(
                products[p].id_typed().clone(),
                suppliers[s].id_typed().clone(),
                price,
                lead_time,
            )
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let product_stock = sample_stock(&products, &suppliers, &product_suppliers, now)?;

    let position = |id: &str, p: usize, price: u64, qty: u32, days: i64| -> DomainResult<OrderPosition> {
        OrderPosition::new(
            OrderPositionId::new(id)?,
            products[p].id_typed().clone(),
            price,
            qty,
            0,
            now + Duration::days(days),
        )
    };

    let purchase_orders = vec![
        PurchaseOrder::new(
            OrderId::new("po_01")?,
            suppliers[0].id_typed().clone(),
            vec![
                position("op_1", 0, 1300, 3, 7)?,
                position("op_2", 1, 1600, 1, 7)?,
                position("op_3", 2, 1800, 1, 7)?,
                position("op_4", 3, 2100, 1, 7)?,
                position("op_5", 4, 3000, 1, 7)?,
            ],
            now - Duration::days(7),
        )?,
        PurchaseOrder::new(
            OrderId::new("po_02")?,
            suppliers[1].id_typed().clone(),
            vec![position("op_1", 0, 1300, 1, 8)?],
            now - Duration::days(1),
        )?,
    ];

    let sales_orders = vec![SalesOrder::new(
        OrderId::new("so_1")?,
        customers[0].id_typed().clone(),
        vec![position("op_1", 0, 1300, 1, 7)?],
        now - Duration::days(7),
    )?];

    let issue = |id: &str, severity: IssueSeverity, p: usize, days_ago: i64| -> DomainResult<Issue> {
        Ok(Issue {
            id: IssueId::new(id)?,
            severity,
            product_id: products[p].id_typed().clone(),
            reported_at: now - Duration::days(days_ago),
        })
    };

    let issues = vec![
        issue("is_01", IssueSeverity::Severe, 0, 1)?,
        issue("is_02", IssueSeverity::Low, 0, 2)?,
        issue("is_03", IssueSeverity::Major, 2, 3)?,
        issue("is_04", IssueSeverity::Major, 3, 10)?,
        issue("is_05", IssueSeverity::Severe, 4, 12)?,
        issue("is_06", IssueSeverity::Low, 1, 20)?,
    ];

    Ok(Dataset {
        products,
        suppliers,
        customers,
        product_suppliers,
        product_stock,
        purchase_orders,
        sales_orders,
        issues,
    })
}

/// Round `i` pairs product `i % 5` with supplier `i % 2` and records a batch
/// only when that pair has a list price.
fn sample_stock(
    products: &[Product],
    suppliers: &[Supplier],
    links: &[ProductSupplier],
    now: DateTime<Utc>,
) -> DomainResult<Vec<ProductStock>> {
    let mut batches = Vec::new();
    for i in 0..STOCK_ROUNDS {
        let product = &products[i % products.len()];
        let supplier = &suppliers[i % suppliers.len()];
        let Some(link) = links
            .iter()
            .find(|l| l.matches(product.id_typed(), supplier.id_typed()))
        else {
            continue;
        };

        batches.push(ProductStock::new(
            product.id_typed().clone(),
            link.price,
            format!("2023/06/{}", batches.len()),
            ((i * 7 + 3) % 11) as u64,
            now - Duration::days((i % 14) as i64),
        )?);
    }
    Ok(batches)
}
