//! Cart aggregate and line types.

use crate::cart::{CartSummary, StockPolicy};
use crate::catalog::{ProductSnapshot, VariantSelector};
use crate::ids::{LineId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// The shopper's cart.
///
/// Lines are unique on `(product id, variant)`. `total_items` and
/// `total_price` are recomputed after every mutation and on deserialization,
/// so they always equal the sums over `lines`.
///
/// Every operation is total: unknown line ids are ignored and a quantity of
/// zero or less removes the line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "CartRecord")]
pub struct Cart {
    lines: Vec<CartLine>,
    total_items: u64,
    total_price: Money,
    currency: Currency,
    /// Slide-over visibility. UI state only, rehydrates closed.
    #[serde(skip)]
    is_open: bool,
    #[serde(skip)]
    stock_policy: StockPolicy,
}

/// Persisted shape of a cart. Totals are derived, so they are not read back.
#[derive(Deserialize)]
struct CartRecord {
    #[serde(default)]
    lines: Vec<CartLine>,
    #[serde(default)]
    currency: Currency,
}

impl From<CartRecord> for Cart {
    fn from(record: CartRecord) -> Self {
        let mut cart = Cart::new(record.currency);
        for line in record.lines.into_iter().filter(|l| l.quantity > 0) {
            match cart
                .lines
                .iter_mut()
                .find(|l| l.matches(&line.product.id, line.variant.as_ref()))
            {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart.recompute();
        cart
    }
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            total_items: 0,
            total_price: Money::zero(currency),
            currency,
            is_open: false,
            stock_policy: StockPolicy::default(),
        }
    }

    /// Set the stock policy applied by later quantity changes.
    pub fn with_stock_policy(mut self, policy: StockPolicy) -> Self {
        self.stock_policy = policy;
        self
    }

    /// Change the stock policy. Existing quantities are left untouched.
    pub fn set_stock_policy(&mut self, policy: StockPolicy) {
        self.stock_policy = policy;
    }

    /// The active stock policy.
    pub fn stock_policy(&self) -> StockPolicy {
        self.stock_policy
    }

    /// Add one unit of `product`.
    pub fn add(
        &mut self,
        product: ProductSnapshot,
        variant: Option<VariantSelector>,
    ) -> Option<LineId> {
        self.add_quantity(product, 1, variant)
    }

    /// Add `quantity` units of `product`.
    ///
    /// If a line with the same product id and an equal variant exists its
    /// quantity grows (up to the stock limit, never below its current value)
    /// and its original snapshot is kept; otherwise a new line is created. Returns the affected line, or `None` when nothing was
    /// stored (zero quantity, or clamped to zero by the stock policy).
    pub fn add_quantity(
        &mut self,
        product: ProductSnapshot,
        quantity: u32,
        variant: Option<VariantSelector>,
    ) -> Option<LineId> {
        if quantity == 0 {
            return None;
        }

        let policy = self.stock_policy;
        let existing = self
            .lines
            .iter()
            .position(|l| l.matches(&product.id, variant.as_ref()));

        let id = match existing {
            Some(idx) => {
                // Adding never lowers a quantity, even one above the stock
                // limit from an earlier, looser policy.
                let line = &mut self.lines[idx];
                let wanted = line.quantity.saturating_add(quantity);
                line.quantity = line.quantity.max(policy.apply(wanted, line.product.stock));
                Some(line.id.clone())
            }
            None => {
                let quantity = policy.apply(quantity, product.stock);
                if quantity == 0 {
                    None
                } else {
                    let line = CartLine::new(product, quantity, variant);
                    let id = line.id.clone();
                    self.lines.push(line);
                    Some(id)
                }
            }
        };

        self.recompute();
        id
    }

    /// Remove a line. Returns `false` if no line had that id.
    pub fn remove(&mut self, line_id: &LineId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != line_id);
        let removed = self.lines.len() < len_before;
        if removed {
            self.recompute();
        }
        removed
    }

    /// Overwrite a line's quantity.
    ///
    /// A quantity of zero or less removes the line. Returns `false` if no line
    /// had that id.
    pub fn set_quantity(&mut self, line_id: &LineId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(line_id);
        }
        let requested = u32::try_from(quantity).unwrap_or(u32::MAX);

        let policy = self.stock_policy;
        let Some(line) = self.lines.iter_mut().find(|l| &l.id == line_id) else {
            return false;
        };
        line.quantity = policy.apply(requested, line.product.stock);
        if line.quantity == 0 {
            return self.remove(line_id);
        }
        self.recompute();
        true
    }

    /// Add one to a line's quantity.
    pub fn increment(&mut self, line_id: &LineId) -> bool {
        match self.line(line_id) {
            Some(line) => {
                let next = i64::from(line.quantity) + 1;
                self.set_quantity(line_id, next)
            }
            None => false,
        }
    }

    /// Subtract one from a line's quantity, removing it at zero.
    pub fn decrement(&mut self, line_id: &LineId) -> bool {
        match self.line(line_id) {
            Some(line) => {
                let next = i64::from(line.quantity) - 1;
                self.set_quantity(line_id, next)
            }
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.recompute();
    }

    /// Show the cart.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hide the cart.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Flip visibility.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Whether the cart is shown.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by id.
    pub fn line(&self, line_id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == line_id)
    }

    /// Get the line for a product and variant.
    pub fn find(
        &self,
        product_id: &ProductId,
        variant: Option<&VariantSelector>,
    ) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.matches(product_id, variant))
    }

    /// Whether any line holds `product_id`, whatever the variant.
    pub fn contains_product(&self, product_id: &ProductId) -> bool {
        self.lines.iter().any(|l| &l.product.id == product_id)
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Sum of price * quantity over all lines.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Re-denominate the cart. Line prices keep their minor-unit amounts.
    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
        self.recompute();
    }

    /// Number of distinct lines.
    pub fn unique_line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Totals and per-line breakdown.
    pub fn summary(&self) -> CartSummary {
        CartSummary::of(self)
    }

    fn recompute(&mut self) {
        let currency = self.currency;
        self.total_items = self.lines.iter().map(|l| u64::from(l.quantity)).sum();
        self.total_price = self
            .lines
            .iter()
            .fold(Money::zero(currency), |acc, l| {
                acc.saturating_add(l.subtotal(currency))
            });
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

/// One product (and optional variant) in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Unique line identifier.
    pub id: LineId,
    /// Product snapshot taken when the line was created.
    pub product: ProductSnapshot,
    /// Quantity, at least 1.
    pub quantity: u32,
    /// Selected variant.
    #[serde(default)]
    pub variant: Option<VariantSelector>,
}

impl CartLine {
    fn new(product: ProductSnapshot, quantity: u32, variant: Option<VariantSelector>) -> Self {
        Self {
            id: LineId::generate(),
            product,
            quantity,
            variant,
        }
    }

    /// Whether this line is the one for `product_id` and `variant`.
    pub fn matches(&self, product_id: &ProductId, variant: Option<&VariantSelector>) -> bool {
        &self.product.id == product_id && self.variant.as_ref() == variant
    }

    /// price * quantity.
    pub fn subtotal(&self, currency: Currency) -> Money {
        self.product.unit_price(currency).saturating_mul(self.quantity)
    }

    /// Quantity is above the stock recorded in the snapshot.
    pub fn exceeds_stock(&self) -> bool {
        self.product.stock.is_some_and(|stock| self.quantity > stock)
    }
}
