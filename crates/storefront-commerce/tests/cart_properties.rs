//! Property tests for the cart aggregate.
//!
//! Arbitrary operation sequences are replayed against the cart and against a
//! plain map keyed on (product, variant); both must agree after every step.

use std::collections::HashMap;

use proptest::prelude::*;
use storefront_commerce::prelude::*;

const PRODUCTS: [(&str, i64); 4] = [
    ("MLA-1", 1500),
    ("MLA-2", 990),
    ("MLA-3", 25),
    ("MLA-4", 0),
];

fn variant(idx: usize) -> Option<VariantSelector> {
    match idx {
        0 => None,
        1 => Some(VariantSelector::new("color", "red")),
        2 => Some(VariantSelector::new("color", "blue")),
        _ => Some(VariantSelector::new("size", "XL")),
    }
}

fn product(idx: usize) -> ProductSnapshot {
    let (id, price) = PRODUCTS[idx];
    ProductSnapshot::new(id, format!("Product {id}"), price)
}

#[derive(Debug, Clone)]
enum Op {
    Add { product: usize, variant: usize, qty: u32 },
    Remove { line: usize },
    SetQuantity { line: usize, qty: i64 },
    Clear,
    Toggle,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..PRODUCTS.len(), 0usize..4, 0u32..5)
            .prop_map(|(product, variant, qty)| Op::Add { product, variant, qty }),
        1 => (0usize..8).prop_map(|line| Op::Remove { line }),
        2 => (0usize..8, -2i64..6).prop_map(|(line, qty)| Op::SetQuantity { line, qty }),
        1 => Just(Op::Clear),
        1 => Just(Op::Toggle),
    ]
}

type Model = HashMap<(String, Option<String>), u32>;

fn model_key(line: &CartLine) -> (String, Option<String>) {
    (
        line.product.id.to_string(),
        line.variant.as_ref().map(VariantSelector::canonical_key),
    )
}

/// Picks an existing line by position, or a line id that is not in the cart.
fn pick_line(cart: &Cart, idx: usize) -> LineId {
    cart.lines()
        .get(idx % cart.lines().len().max(1))
        .map(|l| l.id.clone())
        .unwrap_or_else(|| LineId::new("line_missing"))
}

fn apply(cart: &mut Cart, model: &mut Model, op: &Op) {
    match *op {
        Op::Add { product: p, variant: v, qty } => {
            cart.add_quantity(product(p), qty, variant(v));
            if qty > 0 {
                let key = (
                    PRODUCTS[p].0.to_string(),
                    variant(v).as_ref().map(VariantSelector::canonical_key),
                );
                *model.entry(key).or_insert(0) += qty;
            }
        }
        Op::Remove { line } => {
            let id = pick_line(cart, line);
            if let Some(l) = cart.line(&id) {
                model.remove(&model_key(l));
            }
            cart.remove(&id);
        }
        Op::SetQuantity { line, qty } => {
            let id = pick_line(cart, line);
            if let Some(l) = cart.line(&id) {
                let key = model_key(l);
                if qty <= 0 {
                    model.remove(&key);
                } else if let Some(entry) = model.get_mut(&key) {
                    *entry = qty as u32;
                }
            }
            cart.set_quantity(&id, qty);
        }
        Op::Clear => {
            cart.clear();
            model.clear();
        }
        Op::Toggle => cart.toggle(),
    }
}

fn assert_totals_consistent(cart: &Cart) -> Result<(), TestCaseError> {
    let items: u64 = cart.lines().iter().map(|l| u64::from(l.quantity)).sum();
    let price: i64 = cart
        .lines()
        .iter()
        .map(|l| l.product.price * i64::from(l.quantity))
        .sum();
    prop_assert_eq!(cart.total_items(), items);
    prop_assert_eq!(cart.total_price().amount_minor, price);
    prop_assert!(cart.lines().iter().all(|l| l.quantity > 0));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Repeated adds of one (product, variant) collapse into one line.
    #[test]
    fn same_key_adds_coalesce(
        variant_idx in 0usize..4,
        quantities in prop::collection::vec(1u32..20, 1..10),
    ) {
        let mut cart = Cart::default();
        for &q in &quantities {
            cart.add_quantity(product(0), q, variant(variant_idx));
        }

        let expected: u64 = quantities.iter().map(|&q| u64::from(q)).sum();
        prop_assert_eq!(cart.unique_line_count(), 1);
        prop_assert_eq!(u64::from(cart.lines()[0].quantity), expected);
        prop_assert_eq!(cart.total_items(), expected);
    }

    /// Distinct (product, variant) pairs each get their own line.
    #[test]
    fn distinct_keys_make_distinct_lines(
        pairs in prop::collection::hash_set((0..PRODUCTS.len(), 0usize..4), 1..16),
    ) {
        let mut cart = Cart::default();
        for &(p, v) in &pairs {
            cart.add(product(p), variant(v));
        }

        prop_assert_eq!(cart.unique_line_count(), pairs.len());
        prop_assert_eq!(cart.total_items(), pairs.len() as u64);
    }

    /// Totals always match the lines, and the cart matches a simple model.
    #[test]
    fn totals_track_lines(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut cart = Cart::default();
        let mut model = Model::new();

        for op in &ops {
            apply(&mut cart, &mut model, op);
            assert_totals_consistent(&cart)?;

            prop_assert_eq!(cart.unique_line_count(), model.len());
            for line in cart.lines() {
                prop_assert_eq!(line.quantity, model[&model_key(line)]);
            }
        }
    }

    /// Setting quantity to zero is the same as removing.
    #[test]
    fn set_zero_equals_remove(
        ops in prop::collection::vec(op_strategy(), 1..32),
        pick in 0usize..8,
    ) {
        let mut cart = Cart::default();
        let mut model = Model::new();
        for op in &ops {
            apply(&mut cart, &mut model, op);
        }
        let id = pick_line(&cart, pick);

        let mut via_set = cart.clone();
        let mut via_remove = cart;
        via_set.set_quantity(&id, 0);
        via_remove.remove(&id);

        prop_assert_eq!(via_set, via_remove);
    }

    /// Clear always ends empty with zero totals.
    #[test]
    fn clear_empties(ops in prop::collection::vec(op_strategy(), 0..32)) {
        let mut cart = Cart::default();
        let mut model = Model::new();
        for op in &ops {
            apply(&mut cart, &mut model, op);
        }

        cart.clear();
        prop_assert!(cart.is_empty());
        prop_assert_eq!(cart.total_items(), 0);
        prop_assert!(cart.total_price().is_zero());
    }

    /// Removing an absent line twice changes nothing.
    #[test]
    fn remove_is_idempotent(
        ops in prop::collection::vec(op_strategy(), 1..32),
        pick in 0usize..8,
    ) {
        let mut cart = Cart::default();
        let mut model = Model::new();
        for op in &ops {
            apply(&mut cart, &mut model, op);
        }
        let id = pick_line(&cart, pick);

        cart.remove(&id);
        let once = cart.clone();
        cart.remove(&id);
        prop_assert_eq!(cart, once);
    }

    /// Serialize, drop, rehydrate: same lines and totals, panel closed.
    #[test]
    fn snapshot_round_trip(ops in prop::collection::vec(op_strategy(), 0..32)) {
        let mut cart = Cart::default();
        let mut model = Model::new();
        for op in &ops {
            apply(&mut cart, &mut model, op);
        }

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(restored.lines(), cart.lines());
        prop_assert_eq!(restored.total_items(), cart.total_items());
        prop_assert_eq!(restored.total_price(), cart.total_price());
        prop_assert!(!restored.is_open());
    }
}

#[test]
fn scenario_three_lines_cleared() {
    let mut cart = Cart::default();
    cart.add_quantity(product(0), 2, None);
    cart.add_quantity(product(1), 5, variant(1));
    cart.add_quantity(product(2), 1, variant(3));
    assert_eq!(cart.unique_line_count(), 3);

    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);
    assert!(cart.total_price().is_zero());
}

#[test]
fn scenario_line_prices_sum() {
    let mut cart = Cart::default();
    cart.add_quantity(ProductSnapshot::new("a", "A", 10), 2, None);
    cart.add_quantity(ProductSnapshot::new("b", "B", 5), 1, None);
    assert_eq!(cart.total_price().amount_minor, 25);
}
