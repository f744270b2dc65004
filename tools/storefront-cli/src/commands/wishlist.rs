//! Wishlist commands.

use anyhow::Result;
use storefront_commerce::wishlist::Wishlist;
use storefront_commerce::{Currency, ProductId};

use super::{confirm_clear, finish};
use super::{WishlistArgs, WishlistCommand};
use crate::context::Context;

/// Run the wishlist command.
pub fn run(args: WishlistArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;

    match args.command {
        WishlistCommand::Add { product } => {
            let snapshot = product.snapshot();
            let name = snapshot.name.clone();
            if shop.wishlist_mut().add(snapshot) {
                ctx.output.success(&format!("Saved {}", name));
            } else {
                ctx.output.info(&format!("{} is already saved", name));
            }
        }
        WishlistCommand::Remove { product_id } => {
            match shop.wishlist_mut().remove(&ProductId::new(product_id.as_str())) {
                Some(product) => ctx.output.success(&format!("Removed {}", product.name)),
                None => ctx.output.warn(&format!("{} is not saved", product_id)),
            }
        }
        WishlistCommand::Toggle { product } => {
            let snapshot = product.snapshot();
            let name = snapshot.name.clone();
            if shop.wishlist_mut().toggle(snapshot) {
                ctx.output.success(&format!("Saved {}", name));
            } else {
                ctx.output.success(&format!("Removed {}", name));
            }
        }
        WishlistCommand::MoveToCart {
            product_id,
            variant,
        } => {
            let id = ProductId::new(product_id.as_str());
            if !shop.wishlist().wishlist().contains(&id) {
                ctx.output.warn(&format!("{} is not saved", id));
            } else {
                match shop.move_to_cart(&id, variant) {
                    Some(line) => ctx.output.success(&format!("Moved {} to the cart ({})", id, line)),
                    None => ctx.output.warn(&format!("{} is sold out; kept it saved", id)),
                }
            }
        }
        WishlistCommand::Clear { yes } => {
            if shop.wishlist().wishlist().is_empty() {
                ctx.output.info("Wishlist is already empty");
            } else if confirm_clear(yes, ctx, "Remove every saved product?")? {
                shop.wishlist_mut().clear();
                ctx.output.success("Wishlist cleared");
            } else {
                ctx.output.info("Cancelled");
            }
        }
        WishlistCommand::List => {}
    }

    finish(&mut shop, ctx)?;
    list(shop.wishlist().wishlist(), shop.config().currency, ctx);
    Ok(())
}

fn list(wishlist: &Wishlist, currency: Currency, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(wishlist);
        return;
    }

    ctx.output.header("Wishlist");
    if wishlist.is_empty() {
        ctx.output.info("Empty");
        return;
    }

    for product in wishlist.items() {
        let mut item = format!(
            "{} {} {}",
            product.id,
            product.name,
            product.unit_price(currency).display()
        );
        if product.is_sold_out() {
            item.push_str(" (sold out)");
        }
        ctx.output.list_item(&item);
    }
}
