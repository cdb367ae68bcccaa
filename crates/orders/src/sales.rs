use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockboard_core::{CustomerId, DomainResult, Entity, OrderId};

use crate::position::{OrderPosition, ProductOrder, validate_positions};

/// An order placed by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub order_positions: Vec<OrderPosition>,
    pub creation_date: DateTime<Utc>,
}

impl SalesOrder {
    pub fn new(
        id: OrderId,
        customer_id: CustomerId,
        order_positions: Vec<OrderPosition>,
        creation_date: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let order = Self {
            id,
            customer_id,
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

impl Entity for SalesOrder {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl ProductOrder for SalesOrder {
    fn positions(&self) -> &[OrderPosition] {
        &self.order_positions
    }
}
