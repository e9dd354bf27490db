//! Cart aggregator: session-owned line items and derived totals.

use serde::{Deserialize, Serialize};

use celestial_catalog::ProductId;
use celestial_core::{Entity, Money};

use crate::line_item::{CartLineItem, CatalogSelection};

/// Flat shipping charged on any non-empty cart. A fixed business policy
/// constant - not derived from weight or distance.
pub const FLAT_SHIPPING: Money = Money::from_major(10);

/// Derived totals. Always recomputed from current line items on read; never
/// stored independently, so they cannot go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
}

/// The cart aggregator.
///
/// Owns an ordered sequence of line items; insertion order determines render
/// order. Line item ids are unique within the cart: adding an id that is
/// already present merges into the existing line instead of appending.
///
/// Every operation is total. Unknown ids no-op, quantity updates clamp to a
/// floor of 1, and there is no error path anywhere in this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines - the header badge count.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(CartLineItem::quantity).sum()
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Add one unit of `selection` to the cart.
    ///
    /// Merge-by-id: if a line with the same id exists its quantity grows by
    /// exactly one and the selection's name/price are ignored - first-seen
    /// values persist for the life of the cart session. Otherwise a new line
    /// with quantity 1 is appended.
    pub fn add_item(&mut self, selection: CatalogSelection) {
        match self.items.iter_mut().find(|item| item.id() == &selection.id) {
            Some(existing) => existing.increment(),
            None => self.items.push(CartLineItem::first_of(selection)),
        }
    }

    /// Set the quantity of the line with `id` to `max(1, new_quantity)`.
    ///
    /// The UI's decrement affordance passes `current - 1`; the clamp is what
    /// keeps a decrement at quantity 1 from reaching zero. Unknown ids no-op.
    pub fn update_quantity(&mut self, id: &ProductId, new_quantity: i64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id() == id) {
            item.set_quantity_clamped(new_quantity);
        }
    }

    /// Remove the line with `id`, whatever its quantity. Unknown ids no-op.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.items.retain(|item| item.id() != id);
    }

    /// Compute subtotal, shipping, and total from current line items.
    pub fn totals(&self) -> CartTotals {
        let subtotal: Money = self.items.iter().map(CartLineItem::line_total).sum();
        let shipping = if subtotal.is_zero() { Money::ZERO } else { FLAT_SHIPPING };
        CartTotals {
            subtotal,
            shipping,
            total: subtotal.saturating_add(shipping),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_item::ItemKind;

    fn selection(id: &str, price_major: u64) -> CatalogSelection {
        CatalogSelection {
            id: ProductId::from(id),
            name: format!("Item {id}"),
            unit_price: Money::from_major(price_major),
            kind: ItemKind::Gemstone,
            image: None,
        }
    }

    #[test]
    fn empty_cart_has_zero_totals() {
        let cart = Cart::new();
        let totals = cart.totals();
        assert_eq!(totals.subtotal, Money::ZERO);
        assert_eq!(totals.shipping, Money::ZERO);
        assert_eq!(totals.total, Money::ZERO);
    }

    #[test]
    fn add_twice_merges_into_one_line() {
        let mut cart = Cart::new();
        cart.add_item(selection("a", 10));
        cart.add_item(selection("a", 10));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&ProductId::from("a")).unwrap().quantity(), 2);
        assert_eq!(cart.totals().subtotal, Money::from_major(20));
    }

    #[test]
    fn merge_keeps_first_seen_price_and_name() {
        let mut cart = Cart::new();
        cart.add_item(selection("a", 10));
        // Catalog price changed between clicks; the line keeps $10.00.
        let mut repriced = selection("a", 99);
        repriced.name = "Renamed".to_owned();
        cart.add_item(repriced);

        let line = cart.get(&ProductId::from("a")).unwrap();
        assert_eq!(line.unit_price(), Money::from_major(10));
        assert_eq!(line.name(), "Item a");
        assert_eq!(line.quantity(), 2);
    }

    #[test]
    fn distinct_ids_append_in_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(selection("a", 10));
        cart.add_item(selection("b", 20));
        cart.add_item(selection("a", 10));
        cart.add_item(selection("c", 30));
        let ids: Vec<_> = cart.items().iter().map(|i| i.id().as_str().to_owned()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn update_quantity_clamps_to_floor_of_one() {
        let mut cart = Cart::new();
        cart.add_item(selection("a", 10));
        cart.update_quantity(&ProductId::from("a"), -5);
        assert_eq!(cart.get(&ProductId::from("a")).unwrap().quantity(), 1);
        cart.update_quantity(&ProductId::from("a"), 0);
        assert_eq!(cart.get(&ProductId::from("a")).unwrap().quantity(), 1);
        cart.update_quantity(&ProductId::from("a"), 4);
        assert_eq!(cart.get(&ProductId::from("a")).unwrap().quantity(), 4);
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut cart = Cart::new();
        cart.add_item(selection("a", 10));
        let before = cart.clone();

        cart.update_quantity(&ProductId::from("missing"), 5);
        assert_eq!(cart, before);

        cart.remove_item(&ProductId::from("missing"));
        assert_eq!(cart, before);
    }

    #[test]
    fn remove_is_unconditional_regardless_of_quantity() {
        let mut cart = Cart::new();
        cart.add_item(selection("a", 10));
        cart.update_quantity(&ProductId::from("a"), 9);
        cart.remove_item(&ProductId::from("a"));
        assert!(cart.is_empty());
    }

    #[test]
    fn shipping_is_flat_when_subtotal_positive() {
        let mut cart = Cart::new();
        cart.add_item(selection("a", 45));
        let totals = cart.totals();
        assert_eq!(totals.subtotal, Money::from_major(45));
        assert_eq!(totals.shipping, FLAT_SHIPPING);
        assert_eq!(totals.total, Money::from_major(55));
    }

    #[test]
    fn totals_reflect_current_state_on_every_read() {
        let mut cart = Cart::new();
        cart.add_item(selection("a", 45));
        assert_eq!(cart.totals().total, Money::from_major(55));
        cart.update_quantity(&ProductId::from("a"), 3);
        assert_eq!(cart.totals().subtotal, Money::from_major(135));
        cart.remove_item(&ProductId::from("a"));
        assert_eq!(cart.totals().total, Money::ZERO);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(String, u64),
            Update(String, i64),
            Remove(String),
        }

        fn arb_op() -> impl Strategy<Value = Op> {
            let id = proptest::sample::select(vec!["a", "b", "c", "d", "missing"])
                .prop_map(str::to_owned);
            prop_oneof![
                (id.clone(), 1u64..500).prop_map(|(id, price)| Op::Add(id, price)),
                (id.clone(), -10i64..20).prop_map(|(id, q)| Op::Update(id, q)),
                id.prop_map(Op::Remove),
            ]
        }

        proptest! {
            /// Invariant: no stored line ever has quantity 0, whatever the
            /// operation sequence.
            #[test]
            fn quantity_floor_holds(ops in proptest::collection::vec(arb_op(), 0..40)) {
                let mut cart = Cart::new();
                for op in ops {
                    match op {
                        Op::Add(id, price) => cart.add_item(selection(&id, price)),
                        Op::Update(id, q) => cart.update_quantity(&ProductId::from(id.as_str()), q),
                        Op::Remove(id) => cart.remove_item(&ProductId::from(id.as_str())),
                    }
                    prop_assert!(cart.items().iter().all(|i| i.quantity() >= 1));
                }
            }

            /// Invariant: line ids stay unique, whatever the operation sequence.
            #[test]
            fn ids_stay_unique(ops in proptest::collection::vec(arb_op(), 0..40)) {
                let mut cart = Cart::new();
                for op in ops {
                    match op {
                        Op::Add(id, price) => cart.add_item(selection(&id, price)),
                        Op::Update(id, q) => cart.update_quantity(&ProductId::from(id.as_str()), q),
                        Op::Remove(id) => cart.remove_item(&ProductId::from(id.as_str())),
                    }
                    let mut ids: Vec<_> = cart.items().iter().map(|i| i.id().clone()).collect();
                    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
                    ids.dedup();
                    prop_assert_eq!(ids.len(), cart.len());
                }
            }

            /// Invariant: totals always recompute to subtotal + flat shipping.
            #[test]
            fn totals_are_consistent(ops in proptest::collection::vec(arb_op(), 0..40)) {
                let mut cart = Cart::new();
                for op in ops {
                    match op {
                        Op::Add(id, price) => cart.add_item(selection(&id, price)),
                        Op::Update(id, q) => cart.update_quantity(&ProductId::from(id.as_str()), q),
                        Op::Remove(id) => cart.remove_item(&ProductId::from(id.as_str())),
                    }
                }
                let totals = cart.totals();
                let expected_subtotal: Money =
                    cart.items().iter().map(|i| i.line_total()).sum();
                prop_assert_eq!(totals.subtotal, expected_subtotal);
                if expected_subtotal.is_zero() {
                    prop_assert_eq!(totals.shipping, Money::ZERO);
                } else {
                    prop_assert_eq!(totals.shipping, FLAT_SHIPPING);
                }
                prop_assert_eq!(totals.total, expected_subtotal.saturating_add(totals.shipping));
            }
        }
    }
}
