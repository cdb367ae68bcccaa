use std::sync::Arc;

use stockboard_core::{DomainResult, ProductId};
use stockboard_infra::access::ProductClient;
use stockboard_inventory::{
    ProductStatistic, StockLevel, product_total_quantity, product_total_value, total_quantity,
    total_value,
};
use stockboard_products::Product;

/// Product-level quantity/value totals and rankings.
///
/// Unknown product ids are not an error: their totals are zero.
#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductClient>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductClient>) -> Self {
        Self { products }
    }

    pub fn get_products(&self) -> Vec<Product> {
        let products = self.products.all_products();
        tracing::debug!(returned = products.len(), "listed products");
        products
    }

    pub fn get_product(&self, id: &ProductId) -> Option<Product> {
        self.products.product(id)
    }

    pub fn get_total_quantity(&self) -> u64 {
        let batches = self.products.all_product_stock();
        let total = total_quantity(&batches);
        tracing::debug!(batches = batches.len(), total, "summed stock quantity");
        total
    }

    pub fn get_total_value(&self) -> u64 {
        let batches = self.products.all_product_stock();
        let total = total_value(&batches);
        tracing::debug!(batches = batches.len(), total, "summed stock value");
        total
    }

    pub fn get_product_total_quantity(&self, id: &ProductId) -> u64 {
        let total = product_total_quantity(&self.products.all_product_stock(), id);
        tracing::debug!(product_id = %id, total, "summed product quantity");
        total
    }

    pub fn get_product_total_value(&self, id: &ProductId) -> u64 {
        let total = product_total_value(&self.products.all_product_stock(), id);
        tracing::debug!(product_id = %id, total, "summed product value");
        total
    }

    pub fn get_top_products_by_quantity(&self, n: usize) -> Vec<ProductStatistic> {
        let top = self.products.top_n_products_by_quantity(n);
        tracing::debug!(n, returned = top.len(), "ranked products by quantity");
        top
    }

    pub fn get_top_products_by_value(&self, n: usize) -> Vec<ProductStatistic> {
        let top = self.products.top_n_products_by_value(n);
        tracing::debug!(n, returned = top.len(), "ranked products by value");
        top
    }

    /// Replace the product with the same id, or insert it.
    pub fn upsert_product(&self, product: Product) -> DomainResult<Product> {
        let action = match self.products.product(product.id_typed()) {
            Some(_) => "updated",
            None => "inserted",
        };
        let stored = self.products.upsert_product(product)?;
        tracing::info!(product_id = %stored.id_typed(), action, "upserted product");
        Ok(stored)
    }

    /// Insert a new product under a freshly generated id.
    pub fn create_product(
        &self,
        name: impl Into<String>,
        minimum_stock_level: u32,
        maximum_stock_level: u32,
    ) -> DomainResult<Product> {
        let product = Product::new(
            ProductId::generate(),
            name,
            minimum_stock_level,
            maximum_stock_level,
        )?;
        self.upsert_product(product)
    }

    /// Threshold classification of a product's current stock; `None` for
    /// products outside the catalog.
    pub fn stock_level(&self, id: &ProductId) -> Option<StockLevel> {
        let product = self.products.product(id)?;
        Some(StockLevel::classify(
            &product,
            self.get_product_total_quantity(id),
        ))
    }

    /// Statistics of every product that is empty or under its minimum.
    pub fn products_below_minimum(&self) -> Vec<ProductStatistic> {
        self.products
            .product_statistics()
            .into_iter()
            .filter(|s| StockLevel::classify(&s.product, s.total_quantity).needs_reorder())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stockboard_core::DomainError;
    use stockboard_infra::access::InMemoryProductClient;
    use stockboard_inventory::ProductStock;

    fn pid(id: &str) -> ProductId {
        ProductId::new(id).unwrap()
    }

    fn product(id: &str, min: u32, max: u32) -> Product {
        Product::new(pid(id), format!("Product {id}"), min, max).unwrap()
    }

    fn batch(id: &str, price: u64, quantity: u64) -> ProductStock {
        ProductStock::new(pid(id), price, "2023/06/1", quantity, Utc::now()).unwrap()
    }

    fn service() -> ProductService {
        ProductService::new(Arc::new(InMemoryProductClient::new(
            vec![product("P1", 1, 4), product("P2", 2, 10), product("P3", 0, 10)],
            vec![batch("P1", 10, 3), batch("P1", 10, 2), batch("P2", 5, 1)],
        )))
    }

    #[test]
    fn worked_example() {
        let svc = service();
        assert_eq!(svc.get_total_quantity(), 6);
        assert_eq!(svc.get_total_value(), 55);
        assert_eq!(svc.get_product_total_quantity(&pid("P1")), 5);

        let top = svc.get_top_products_by_quantity(1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].product.id_typed(), &pid("P1"));
        assert_eq!(top[0].total_quantity, 5);
    }

    #[test]
    fn unknown_product_defaults_to_zero() {
        let svc = service();
        assert_eq!(svc.get_product_total_quantity(&pid("NOPE")), 0);
        assert_eq!(svc.get_product_total_value(&pid("NOPE")), 0);
        assert_eq!(svc.stock_level(&pid("NOPE")), None);
    }

    #[test]
    fn top_by_value_includes_zero_stock_products_last() {
        let top = service().get_top_products_by_value(3);
        let ids: Vec<&str> = top.iter().map(|s| s.product.id_typed().as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
        assert_eq!(top[2].total_value, 0);
    }

    #[test]
    fn upsert_updates_existing_product() {
        let svc = service();
        let updated = Product::new(pid("P1"), "iPhone 14", 1, 50).unwrap();
        svc.upsert_product(updated.clone()).unwrap();

        assert_eq!(svc.get_product(&pid("P1")), Some(updated));
        assert_eq!(svc.get_products().len(), 3);
    }

    #[test]
    fn create_product_assigns_fresh_id() {
        let svc = service();
        let created = svc.create_product("MacBook PRO M2", 10, 100).unwrap();

        assert_eq!(svc.get_products().len(), 4);
        assert_eq!(svc.get_product(created.id_typed()), Some(created));
    }

    #[test]
    fn create_product_validates_fields() {
        let err = service().create_product("M2", 10, 100).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn stock_levels_against_thresholds() {
        let svc = service();
        assert_eq!(svc.stock_level(&pid("P1")), Some(StockLevel::AboveMaximum));
        assert_eq!(svc.stock_level(&pid("P2")), Some(StockLevel::BelowMinimum));
        assert_eq!(svc.stock_level(&pid("P3")), Some(StockLevel::Empty));

        let reorder: Vec<String> = svc
            .products_below_minimum()
            .into_iter()
            .map(|s| s.product.id_typed().to_string())
            .collect();
        assert_eq!(reorder, vec!["P2".to_string(), "P3".to_string()]);
    }
}
