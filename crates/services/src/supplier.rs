use std::sync::Arc;

use stockboard_infra::access::SupplierClient;
use stockboard_parties::Supplier;

/// Supplier directory listing.
#[derive(Clone)]
pub struct SupplierService {
    suppliers: Arc<dyn SupplierClient>,
}

impl SupplierService {
    pub fn new(suppliers: Arc<dyn SupplierClient>) -> Self {
        Self { suppliers }
    }

    pub fn get_all_suppliers(&self) -> Vec<Supplier> {
        let suppliers = self.suppliers.all_suppliers();
        tracing::debug!(returned = suppliers.len(), "listed suppliers");
        suppliers
    }
}
