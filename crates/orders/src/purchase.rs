use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockboard_core::{DomainResult, Entity, OrderId, SupplierId};

use crate::position::{OrderPosition, ProductOrder, validate_positions};

/// An order placed with a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: OrderId,
    pub supplier_id: SupplierId,
    pub order_positions: Vec<OrderPosition>,
    pub creation_date: DateTime<Utc>,
}

impl PurchaseOrder {
    pub fn new(
        id: OrderId,
        supplier_id: SupplierId,
        order_positions: Vec<OrderPosition>,
        creation_date: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let order = Self {
            id,
            supplier_id,
            order_positions,
            creation_date,
        };
        order.validate()?;
        Ok(order)
    }

    pub fn validate(&self) -> DomainResult<()> {
        validate_positions(&self.id, &self.order_positions)
    }
}

impl Entity for PurchaseOrder {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl ProductOrder for PurchaseOrder {
    fn positions(&self) -> &[OrderPosition] {
        &self.order_positions
    }
}
