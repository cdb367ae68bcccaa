use std::sync::Arc;

use stockboard_core::{DomainError, DomainResult, ProductId};
use stockboard_infra::access::{ProductSupplierClient, SupplierClient};
use stockboard_parties::ProductSupplier;

/// Links between products and the suppliers that deliver them.
#[derive(Clone)]
pub struct ProductSupplierService {
    links: Arc<dyn ProductSupplierClient>,
    suppliers: Arc<dyn SupplierClient>,
}

impl ProductSupplierService {
    pub fn new(links: Arc<dyn ProductSupplierClient>, suppliers: Arc<dyn SupplierClient>) -> Self {
        Self { links, suppliers }
    }

    pub fn get_product_suppliers(&self, product_id: &ProductId) -> Vec<ProductSupplier> {
        let links = self.links.product_suppliers_by_product_id(product_id);
        tracing::debug!(%product_id, returned = links.len(), "filtered product suppliers");
        links
    }

    pub fn get_all_product_suppliers(&self) -> Vec<ProductSupplier> {
        let links = self.links.all_product_suppliers();
        tracing::debug!(returned = links.len(), "listed product suppliers");
        links
    }

    /// Upsert links keyed by (product, supplier) and return the full collection.
    ///
    /// Every link must name a supplier from the directory; otherwise nothing
    /// is written. Applying the same batch twice yields the same collection.
    pub fn upsert_product_suppliers(
        &self,
        links: Vec<ProductSupplier>,
    ) -> DomainResult<Vec<ProductSupplier>> {
        for link in &links {
            if self.suppliers.supplier(&link.supplier_id).is_none() {
                return Err(DomainError::unknown("supplier", &link.supplier_id));
            }
        }

        let incoming = links.len();
        let updated = self.links.upsert_product_suppliers(links)?;
        tracing::info!(incoming, total = updated.len(), "upserted product suppliers");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockboard_core::SupplierId;
    use stockboard_infra::access::{InMemoryProductSupplierClient, InMemorySupplierClient};
    use stockboard_parties::Supplier;

    fn link(product: &str, supplier: &str, price: u64) -> ProductSupplier {
        ProductSupplier::new(
            ProductId::new(product).unwrap(),
            SupplierId::new(supplier).unwrap(),
            price,
            3,
        )
        .unwrap()
    }

    fn service() -> ProductSupplierService {
        ProductSupplierService::new(
            Arc::new(InMemoryProductSupplierClient::new(vec![link("A", "B", 100)])),
            Arc::new(InMemorySupplierClient::new(vec![
                Supplier::new(SupplierId::new("B").unwrap(), "Apple").unwrap(),
                Supplier::new(SupplierId::new("C").unwrap(), "JB-HIFI").unwrap(),
            ])),
        )
    }

    #[test]
    fn overwrite_keeps_single_link() {
        let svc = service();
        let updated = svc.upsert_product_suppliers(vec![link("A", "B", 150)]).unwrap();

        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].price, 150);
        assert_eq!(svc.get_product_suppliers(&ProductId::new("A").unwrap()), updated);
    }

    #[test]
    fn upsert_is_idempotent() {
        let svc = service();
        let batch = vec![link("A", "B", 150), link("A", "C", 90), link("D", "C", 20)];

        let once = svc.upsert_product_suppliers(batch.clone()).unwrap();
        let twice = svc.upsert_product_suppliers(batch).unwrap();

        assert_eq!(once, twice);
        assert_eq!(svc.get_all_product_suppliers().len(), 3);
    }

    #[test]
    fn unknown_supplier_rejects_whole_batch() {
        let svc = service();
        let err = svc
            .upsert_product_suppliers(vec![link("A", "B", 999), link("A", "Z", 1)])
            .unwrap_err();

        assert_eq!(err, DomainError::unknown("supplier", "Z"));
        assert_eq!(svc.get_all_product_suppliers(), vec![link("A", "B", 100)]);
    }

    #[test]
    fn unknown_product_has_no_links() {
        assert!(service().get_product_suppliers(&ProductId::new("Q").unwrap()).is_empty());
    }
}
