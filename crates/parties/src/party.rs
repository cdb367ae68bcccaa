use serde::{Deserialize, Serialize};

use stockboard_core::{CustomerId, DomainError, DomainResult, Entity, SupplierId};

/// A party we buy stock from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    id: SupplierId,
    name: String,
}

impl Supplier {
    pub fn new(id: SupplierId, name: impl Into<String>) -> DomainResult<Self> {
        let supplier = Self {
            id,
            name: name.into(),
        };
        supplier.validate()?;
        Ok(supplier)
    }

    pub fn id_typed(&self) -> &SupplierId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("supplier name cannot be empty"));
        }
        Ok(())
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A party we sell stock to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    id: CustomerId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        address: Option<String>,
    ) -> DomainResult<Self> {
        let customer = Self {
            id,
            name: name.into(),
            address,
        };
        customer.validate()?;
        Ok(customer)
    }

    pub fn id_typed(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        Ok(())
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplier_requires_name() {
        let id = SupplierId::new("sup_01").unwrap();
        assert!(Supplier::new(id.clone(), "Apple").is_ok());
        match Supplier::new(id, "  ").unwrap_err() {
            DomainError::Validation(msg) if msg.contains("supplier name") => {}
            _ => panic!("Expected validation error for blank supplier name"),
        }
    }

    #[test]
    fn customer_keeps_optional_address() {
        let customer = Customer::new(
            CustomerId::new("cus_1").unwrap(),
            "Company XYZ",
            Some("Brisbane".to_string()),
        )
        .unwrap();
        assert_eq!(customer.address(), Some("Brisbane"));
        assert_eq!(customer.id().as_str(), "cus_1");
    }
}
