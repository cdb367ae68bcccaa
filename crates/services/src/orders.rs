use std::sync::Arc;

use stockboard_infra::access::{PurchaseOrderClient, SalesOrderClient};
use stockboard_orders::{PurchaseOrder, SalesOrder};
use stockboard_products::Product;

#[derive(Clone)]
pub struct PurchaseOrderService {
    orders: Arc<dyn PurchaseOrderClient>,
}

impl PurchaseOrderService {
    pub fn new(orders: Arc<dyn PurchaseOrderClient>) -> Self {
        Self { orders }
    }

    pub fn get_all_orders(&self) -> Vec<PurchaseOrder> {
        let orders = self.orders.all_purchase_orders();
        tracing::debug!(returned = orders.len(), "listed purchase orders");
        orders
    }

    /// Purchase orders with at least one position for `product`.
    pub fn get_product_orders(&self, product: &Product) -> Vec<PurchaseOrder> {
        let orders = self.orders.product_purchase_orders(product);
        tracing::debug!(product_id = %product.id_typed(), returned = orders.len(), "filtered purchase orders");
        orders
    }
}

#[derive(Clone)]
pub struct SalesOrderService {
    orders: Arc<dyn SalesOrderClient>,
}

impl SalesOrderService {
    pub fn new(orders: Arc<dyn SalesOrderClient>) -> Self {
        Self { orders }
    }

    pub fn get_all_orders(&self) -> Vec<SalesOrder> {
        let orders = self.orders.all_sales_orders();
        tracing::debug!(returned = orders.len(), "listed sales orders");
        orders
    }

    /// Sales orders with at least one position for `product`.
    pub fn get_product_orders(&self, product: &Product) -> Vec<SalesOrder> {
        let orders = self.orders.product_sales_orders(product.id_typed());
        tracing::debug!(product_id = %product.id_typed(), returned = orders.len(), "filtered sales orders");
        orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stockboard_core::{CustomerId, OrderId, OrderPositionId, ProductId, SupplierId};
    use stockboard_infra::access::{InMemoryPurchaseOrderClient, InMemorySalesOrderClient};
    use stockboard_orders::OrderPosition;

    fn product(id: &str) -> Product {
        Product::new(ProductId::new(id).unwrap(), "iPhone 14", 10, 100).unwrap()
    }

    fn position(op: &str, product: &str) -> OrderPosition {
        OrderPosition::new(
            OrderPositionId::new(op).unwrap(),
            ProductId::new(product).unwrap(),
            1300,
            1,
            0,
            Utc::now(),
        )
        .unwrap()
    }

    fn purchase(id: &str, positions: Vec<OrderPosition>) -> PurchaseOrder {
        PurchaseOrder::new(
            OrderId::new(id).unwrap(),
            SupplierId::new("sup_01").unwrap(),
            positions,
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn purchase_orders_filtered_by_position_product() {
        let svc = PurchaseOrderService::new(Arc::new(InMemoryPurchaseOrderClient::new(vec![
            purchase("po_01", vec![position("op_1", "SKU_001"), position("op_2", "SKU_002")]),
            purchase("po_02", vec![position("op_1", "SKU_001")]),
            purchase("po_03", vec![position("op_1", "SKU_003")]),
        ])));

        assert_eq!(svc.get_all_orders().len(), 3);
        let ids: Vec<String> = svc
            .get_product_orders(&product("SKU_001"))
            .into_iter()
            .map(|o| o.id.to_string())
            .collect();
        assert_eq!(ids, vec!["po_01".to_string(), "po_02".to_string()]);
        assert!(svc.get_product_orders(&product("SKU_009")).is_empty());
    }

    #[test]
    fn sales_orders_filtered_by_position_product() {
        let order = SalesOrder::new(
            OrderId::new("so_1").unwrap(),
            CustomerId::new("cus_1").unwrap(),
            vec![position("op_1", "SKU_001")],
            Utc::now(),
        )
        .unwrap();
        let svc = SalesOrderService::new(Arc::new(InMemorySalesOrderClient::new(vec![order])));

        assert_eq!(svc.get_product_orders(&product("SKU_001")).len(), 1);
        assert!(svc.get_product_orders(&product("SKU_002")).is_empty());
    }
}
