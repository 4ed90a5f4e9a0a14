//! Quote aggregation: a derived view over the placement store.
//!
//! The aggregate is recomputed from the live instance collection on every
//! call and never cached, so it cannot drift from the store under any
//! mutation sequence.

#[cfg(test)]
#[path = "quote_test.rs"]
mod quote_test;

use serde::{Deserialize, Serialize};

use crate::store::PlacementStore;

/// One product group in a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub product_id: String,
    /// Localized product name, as shown on the quote.
    pub name: String,
    pub quantity: u64,
    pub unit_price: u64,
    pub subtotal: u64,
}

/// Grouped totals for the current canvas arrangement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteAggregate {
    pub lines: Vec<QuoteLine>,
    pub grand_total: u64,
}

impl QuoteAggregate {
    /// Group the store's instances by product and total them. Groups appear
    /// in the order each product was first placed.
    #[must_use]
    pub fn from_store(store: &PlacementStore) -> Self {
        let mut lines: Vec<QuoteLine> = Vec::new();
        for instance in store.in_insertion_order() {
            if let Some(line) = lines.iter_mut().find(|l| l.product_id == instance.product_id) {
                line.quantity += 1;
            } else if let Some(product) = store.catalog().get(&instance.product_id) {
                lines.push(QuoteLine {
                    product_id: product.id.clone(),
                    name: product.localized_name.clone(),
                    quantity: 1,
                    unit_price: product.price,
                    subtotal: 0,
                });
            }
        }
        for line in &mut lines {
            line.subtotal = line.unit_price * line.quantity;
        }
        let grand_total = lines.iter().map(|l| l.subtotal).sum();
        Self { lines, grand_total }
    }

    /// Returns `true` when nothing is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
