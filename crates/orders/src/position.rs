use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockboard_core::{DomainError, DomainResult, Entity, OrderId, OrderPositionId, ProductId};

/// One line item within a purchase or sales order.
///
/// `price` is the unit price in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPosition {
    pub id: OrderPositionId,
    pub product_id: ProductId,
    pub price: u64,
    pub quantity_ordered: u32,
    pub quantity_received: u32,
    pub delivery_date: DateTime<Utc>,
}

impl OrderPosition {
    pub fn new(
        id: OrderPositionId,
        product_id: ProductId,
        price: u64,
        quantity_ordered: u32,
        quantity_received: u32,
        delivery_date: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let position = Self {
            id,
            product_id,
            price,
            quantity_ordered,
            quantity_received,
            delivery_date,
        };
        position.validate()?;
        Ok(position)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.quantity_ordered == 0 {
            return Err(DomainError::validation("quantity ordered must be positive"));
        }
        if self.quantity_received > self.quantity_ordered {
            return Err(DomainError::invariant(format!(
                "position {}: quantity received ({}) exceeds quantity ordered ({})",
                self.id, self.quantity_received, self.quantity_ordered
            )));
        }
        Ok(())
    }

    /// Units still to be delivered.
    pub fn outstanding(&self) -> u32 {
        self.quantity_ordered.saturating_sub(self.quantity_received)
    }

    /// `price * quantity_ordered`, saturating.
    pub fn value(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity_ordered))
    }

    pub fn is_for(&self, product_id: &ProductId) -> bool {
        &self.product_id == product_id
    }
}

/// An order made of [`OrderPosition`]s.
pub trait ProductOrder: Entity<Id = OrderId> {
    fn positions(&self) -> &[OrderPosition];

    /// Whether at least one position references `product_id`.
    fn touches_product(&self, product_id: &ProductId) -> bool {
        self.positions().iter().any(|p| p.is_for(product_id))
    }

    /// Sum of position values.
    fn total_value(&self) -> u64 {
        self.positions()
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.value()))
    }

    /// Units of `product_id` ordered but not yet delivered.
    fn outstanding_for(&self, product_id: &ProductId) -> u64 {
        self.positions()
            .iter()
            .filter(|p| p.is_for(product_id))
            .map(|p| u64::from(p.outstanding()))
            .sum()
    }
}

/// Shared order-level checks: every position valid, position ids unique.
pub(crate) fn validate_positions(order_id: &OrderId, positions: &[OrderPosition]) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for position in positions {
        position.validate()?;
        if !seen.insert(&position.id) {
            return Err(DomainError::conflict(format!(
                "order {order_id}: duplicate position id {}",
                position.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(ordered: u32, received: u32) -> DomainResult<OrderPosition> {
        OrderPosition::new(
            OrderPositionId::new("op_1").unwrap(),
            ProductId::new("SKU_001").unwrap(),
            1300,
            ordered,
            received,
            Utc::now(),
        )
    }

    #[test]
    fn received_cannot_exceed_ordered() {
        match position(1, 2).unwrap_err() {
            DomainError::InvariantViolation(msg) if msg.contains("exceeds quantity ordered") => {}
            _ => panic!("Expected invariant violation for over-receipt"),
        }
    }

    #[test]
    fn zero_ordered_is_rejected() {
        assert!(matches!(position(0, 0), Err(DomainError::Validation(_))));
    }

    #[test]
    fn outstanding_and_value() {
        let p = position(3, 1).unwrap();
        assert_eq!(p.outstanding(), 2);
        assert_eq!(p.value(), 3900);
    }

    #[test]
    fn duplicate_position_ids_conflict() {
        let p = position(1, 0).unwrap();
        let err = validate_positions(&OrderId::new("po_01").unwrap(), &[p.clone(), p]).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }
}
