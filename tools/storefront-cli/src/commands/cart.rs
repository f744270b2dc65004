//! Cart commands.

use anyhow::Result;
use storefront_cache::Storage;
use storefront_commerce::cart::CartSummary;
use storefront_commerce::catalog::{ProductSnapshot, VariantSelector};
use storefront_commerce::{LineId, Storefront};

use super::{confirm_clear, finish, CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;

    match args.command {
        CartCommand::Add {
            product,
            qty,
            variant,
        } => {
            let snapshot = product.snapshot();
            let name = snapshot.name.clone();
            let added = add_units(&mut shop, snapshot, qty, variant);
            match added {
                Some((line, 0)) => {
                    ctx.output
                        .warn(&format!("{} is at its stock limit ({})", name, line));
                }
                Some((line, n)) => ctx.output.success(&format!("Added {} x {} ({})", n, name, line)),
                None => ctx.output.warn(&format!("Nothing added for {}", name)),
            }
        }
        CartCommand::Remove { line_id } => {
            let line = LineId::new(line_id);
            if shop.cart_mut().remove(&line) {
                ctx.output.success(&format!("Removed {}", line));
            } else {
                ctx.output.warn(&format!("No line {}", line));
            }
        }
        CartCommand::Set { line_id, qty } => {
            let line = LineId::new(line_id);
            if !shop.cart_mut().set_quantity(&line, qty) {
                ctx.output.warn(&format!("No line {}", line));
            } else if qty <= 0 {
                ctx.output.success(&format!("Removed {}", line));
            } else {
                ctx.output.success(&format!("Set {} to {}", line, qty));
            }
        }
        CartCommand::Incr { line_id } => {
            let line = LineId::new(line_id);
            if !shop.cart_mut().increment(&line) {
                ctx.output.warn(&format!("No line {}", line));
            }
        }
        CartCommand::Decr { line_id } => {
            let line = LineId::new(line_id);
            if !shop.cart_mut().decrement(&line) {
                ctx.output.warn(&format!("No line {}", line));
            }
        }
        CartCommand::Clear { yes } => {
            if shop.cart().cart().is_empty() {
                ctx.output.info("Cart is already empty");
            } else if confirm_clear(yes, ctx, "Remove every line from the cart?")? {
                shop.cart_mut().clear();
                ctx.output.success("Cart cleared");
            } else {
                ctx.output.info("Cancelled");
            }
        }
        CartCommand::Show => {}
    }

    finish(&mut shop, ctx)?;
    show(&shop.cart().summary(), ctx);
    Ok(())
}

/// Add to the cart and report how many units actually landed, which is
/// less than `qty` when the stock policy clamps.
fn add_units<S: Storage>(
    shop: &mut Storefront<S>,
    product: ProductSnapshot,
    qty: u32,
    variant: Option<VariantSelector>,
) -> Option<(LineId, u32)> {
    let before = shop
        .cart()
        .cart()
        .find(&product.id, variant.as_ref())
        .map_or(0, |l| l.quantity);
    let line = shop.cart_mut().add_quantity(product, qty, variant)?;
    let after = shop.cart().cart().line(&line)?.quantity;
    Some((line, after.saturating_sub(before)))
}

fn show(summary: &CartSummary, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(summary);
        return;
    }

    ctx.output.header("Cart");
    if summary.lines.is_empty() {
        ctx.output.info("Empty");
        return;
    }

    let widths = [18, 24, 14, 5, 14];
    ctx.output
        .table_row(&["LINE", "PRODUCT", "UNIT", "QTY", "SUBTOTAL"], &widths);
    for line in &summary.lines {
        let product = match &line.variant {
            Some(variant) => format!("{} ({})", line.name, variant),
            None => line.name.clone(),
        };
        let qty = if line.over_stock {
            format!("{}!", line.quantity)
        } else {
            line.quantity.to_string()
        };
        let unit = line.unit_price.display();
        let subtotal = line.subtotal.display();
        ctx.output.table_row(
            &[
                line.line_id.as_str(),
                product.as_str(),
                unit.as_str(),
                qty.as_str(),
                subtotal.as_str(),
            ],
            &widths,
        );
    }

    println!();
    ctx.output.kv("lines", &summary.line_count.to_string());
    ctx.output.kv("items", &summary.total_items.to_string());
    ctx.output.kv("total", &summary.total_price.display());

    for line in summary.over_stock() {
        ctx.output
            .warn(&format!("{} exceeds the stock last seen for it", line.name));
    }
}
