//! Dataset seeding: the raw records a record store starts out with.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockboard_core::{DomainError, ProductId};
use stockboard_inventory::{ProductStock, orphan_batches};
use stockboard_issues::Issue;
use stockboard_orders::{OrderPosition, PurchaseOrder, SalesOrder};
use stockboard_parties::{Customer, ProductSupplier, Supplier};
use stockboard_products::Product;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid {kind} {id}: {source}")]
    Invalid {
        kind: &'static str,
        id: String,
        #[source]
        source: DomainError,
    },

    #[error("duplicate {kind} {id}")]
    Duplicate { kind: &'static str, id: String },

    #[error("{referrer} references unknown {kind} {id}")]
    DanglingReference {
        referrer: String,
        kind: &'static str,
        id: String,
    },
}

/// Every record family the dashboard reads, as one serializable bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub products: Vec<Product>,
    pub suppliers: Vec<Supplier>,
    pub customers: Vec<Customer>,
    pub product_suppliers: Vec<ProductSupplier>,
    pub product_stock: Vec<ProductStock>,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub sales_orders: Vec<SalesOrder>,
    pub issues: Vec<Issue>,
}

impl Dataset {
    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, SeedError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Stock batches that reference a product outside the catalog.
    ///
    /// These are kept (they still count toward grand totals) but never show
    /// up in per-product statistics.
    pub fn orphan_stock_batches(&self) -> usize {
        orphan_batches(&self.products, &self.product_stock)
    }

    /// Field rules for every record, unique ids per family, and referential
    /// integrity for links, orders, and issues.
    pub fn validate(&self) -> Result<(), SeedError> {
        let products = unique_ids("product", self.products.iter().map(|p| (p.id_typed().as_str(), p.validate())))?;
        let suppliers = unique_ids("supplier", self.suppliers.iter().map(|s| (s.id_typed().as_str(), s.validate())))?;
        let customers = unique_ids("customer", self.customers.iter().map(|c| (c.id_typed().as_str(), c.validate())))?;
        unique_ids("purchase order", self.purchase_orders.iter().map(|o| (o.id.as_str(), o.validate())))?;
        unique_ids("sales order", self.sales_orders.iter().map(|o| (o.id.as_str(), o.validate())))?;
        unique_ids("issue", self.issues.iter().map(|i| (i.id.as_str(), Ok(()))))?;

        let mut pairs = HashSet::new();
        for link in &self.product_suppliers {
            let label = format!("{}/{}", link.product_id, link.supplier_id);
            link.validate().map_err(|source| SeedError::Invalid {
                kind: "product supplier",
                id: label.clone(),
                source,
            })?;
            if !pairs.insert(link.key()) {
                return Err(SeedError::Duplicate {
                    kind: "product supplier",
                    id: label,
                });
            }
            require(&products, link.product_id.as_str(), "product", &label)?;
            require(&suppliers, link.supplier_id.as_str(), "supplier", &label)?;
        }

        for batch in &self.product_stock {
            batch.validate().map_err(|source| SeedError::Invalid {
                kind: "stock batch",
                id: batch.batch.clone(),
                source,
            })?;
        }

        for order in &self.purchase_orders {
            let label = format!("purchase order {}", order.id);
            require(&suppliers, order.supplier_id.as_str(), "supplier", &label)?;
            require_products(&products, &order.order_positions, &label)?;
        }

        for order in &self.sales_orders {
            let label = format!("sales order {}", order.id);
            require(&customers, order.customer_id.as_str(), "customer", &label)?;
            require_products(&products, &order.order_positions, &label)?;
        }

        for issue in &self.issues {
            require(
                &products,
                issue.product_id.as_str(),
                "product",
                &format!("issue {}", issue.id),
            )?;
        }

        Ok(())
    }
}

fn unique_ids<'a>(
    kind: &'static str,
    records: impl Iterator<Item = (&'a str, Result<(), DomainError>)>,
) -> Result<HashSet<&'a str>, SeedError> {
    let mut ids = HashSet::new();
    for (id, valid) in records {
        valid.map_err(|source| SeedError::Invalid {
            kind,
            id: id.to_string(),
            source,
        })?;
        if !ids.insert(id) {
            return Err(SeedError::Duplicate {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(ids)
}

fn require(
    known: &HashSet<&str>,
    id: &str,
    kind: &'static str,
    referrer: &str,
) -> Result<(), SeedError> {
    if known.contains(id) {
        Ok(())
    } else {
        Err(SeedError::DanglingReference {
            referrer: referrer.to_string(),
            kind,
            id: id.to_string(),
        })
    }
}

fn require_products(
    known: &HashSet<&str>,
    positions: &[OrderPosition],
    referrer: &str,
) -> Result<(), SeedError> {
    positions
        .iter()
        .map(|p| &p.product_id)
        .try_for_each(|id: &ProductId| require(known, id.as_str(), "product", referrer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_dataset;
    use chrono::Utc;
    use std::io::Write;

    #[test]
    fn sample_dataset_is_valid() {
        let dataset = sample_dataset(Utc::now()).unwrap();
        dataset.validate().unwrap();
        assert_eq!(dataset.orphan_stock_batches(), 0);
    }

    #[test]
    fn json_file_round_trips_the_sample() {
        let dataset = sample_dataset(Utc::now()).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(dataset.to_json_pretty().unwrap().as_bytes())
            .unwrap();

        let loaded = Dataset::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, dataset);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Dataset::from_json_file("/definitely/not/here.json").unwrap_err();
        match err {
            SeedError::Io { path, .. } => assert!(path.ends_with("here.json")),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn empty_object_is_an_empty_dataset() {
        let dataset = Dataset::from_json_str("{}").unwrap();
        assert_eq!(dataset, Dataset::default());
    }

    #[test]
    fn invalid_product_is_reported() {
        let json = r#"{"products":[{"id":"SKU_1","name":"ab","minimumStockLevel":0,"maximumStockLevel":1}]}"#;
        match Dataset::from_json_str(json).unwrap_err() {
            SeedError::Invalid { kind: "product", id, .. } => assert_eq!(id, "SKU_1"),
            other => panic!("Expected Invalid product, got {other:?}"),
        }
    }

    #[test]
    fn blank_or_spaced_ids_fail_to_parse() {
        for id in ["", "SKU 2"] {
            let json = format!(
                r#"{{"products":[{{"id":"{id}","name":"iPhone 14","minimumStockLevel":0,"maximumStockLevel":1}}]}}"#
            );
            assert!(
                matches!(Dataset::from_json_str(&json), Err(SeedError::Parse(_))),
                "id {id:?} should be rejected"
            );
        }
    }

    #[test]
    fn duplicate_product_ids_are_rejected() {
        let mut dataset = sample_dataset(Utc::now()).unwrap();
        let first = dataset.products[0].clone();
        dataset.products.push(first);
        assert!(matches!(
            dataset.validate(),
            Err(SeedError::Duplicate { kind: "product", .. })
        ));
    }

    #[test]
    fn link_to_unknown_supplier_is_rejected() {
        let mut dataset = sample_dataset(Utc::now()).unwrap();
        dataset.suppliers.retain(|s| s.id_typed().as_str() != "sup_02");
        match dataset.validate() {
            Err(SeedError::DanglingReference { kind: "supplier", id, .. }) => {
                assert_eq!(id, "sup_02")
            }
            other => panic!("Expected dangling supplier reference, got {other:?}"),
        }
    }

    #[test]
    fn issue_for_unknown_product_is_rejected() {
        let mut dataset = sample_dataset(Utc::now()).unwrap();
        dataset.issues[0].product_id = ProductId::new("SKU_404").unwrap();
        assert!(matches!(
            dataset.validate(),
            Err(SeedError::DanglingReference { kind: "product", .. })
        ));
    }
}
