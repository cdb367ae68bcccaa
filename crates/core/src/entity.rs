//! Records addressed by a typed id.

use core::fmt::{Debug, Display};
use core::hash::Hash;

/// A record the dashboard can look up, replace, or join on by id.
///
/// Two values with the same id are versions of the same record, whatever
/// their other fields hold.
pub trait Entity {
    type Id: Clone + Eq + Ord + Hash + Debug + Display;

    fn id(&self) -> &Self::Id;

    /// Whether `other` is a version of the same record.
    fn same_record(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.id() == other.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProductId;

    struct Row {
        id: ProductId,
        label: &'static str,
    }

    impl Entity for Row {
        type Id = ProductId;

        fn id(&self) -> &ProductId {
            &self.id
        }
    }

    #[test]
    fn same_record_compares_ids_only() {
        let a = Row { id: ProductId::new("SKU_001").unwrap(), label: "old" };
        let b = Row { id: ProductId::new("SKU_001").unwrap(), label: "new" };
        let c = Row { id: ProductId::new("SKU_002").unwrap(), label: "old" };

        assert!(a.same_record(&b));
        assert!(!a.same_record(&c));
        assert_ne!(a.label, b.label);
    }
}
