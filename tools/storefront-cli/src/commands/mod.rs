//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod wishlist;

use anyhow::{bail, Context as _, Result};
use clap::{Args, Subcommand};
use dialoguer::Confirm;
use storefront_cache::Storage;
use storefront_commerce::catalog::{ProductSnapshot, VariantSelector};
use storefront_commerce::Storefront;

use crate::context::Context;

/// Write pending changes and report a degraded backend.
pub(crate) fn finish<S: Storage>(shop: &mut Storefront<S>, ctx: &Context) -> Result<()> {
    if shop.is_degraded() {
        ctx.output
            .warn("Storage was unavailable; retrying the write before exit");
    }
    shop.flush().context("Failed to save storefront state")
}

/// Ask before a destructive change. JSON mode never prompts, so it needs
/// `--yes`.
fn confirm_clear(yes: bool, ctx: &Context, prompt: &str) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if ctx.output.is_json() {
        bail!("Refusing to clear without --yes in JSON mode");
    }
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

/// Product snapshot fields, as the backend would have returned them.
#[derive(Args, Debug)]
pub struct ProductArgs {
    /// Backend product id.
    pub product_id: String,

    /// Display name.
    #[arg(short, long)]
    pub name: String,

    /// Unit price in minor units (e.g. cents).
    #[arg(short, long)]
    pub price: i64,

    /// Units in stock.
    #[arg(long)]
    pub stock: Option<u32>,

    /// Image URL.
    #[arg(long)]
    pub image: Option<String>,
}

impl ProductArgs {
    /// Build the snapshot stored in the cart or wishlist.
    pub fn snapshot(&self) -> ProductSnapshot {
        let mut product = ProductSnapshot::new(self.product_id.as_str(), &self.name, self.price);
        product.stock = self.stock;
        product.image = self.image.clone();
        product
    }
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Add a product to the cart.
    Add {
        #[command(flatten)]
        product: ProductArgs,

        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        qty: u32,

        /// Variant as type=value (e.g. color=red).
        #[arg(long)]
        variant: Option<VariantSelector>,
    },
    /// Remove a line.
    Remove {
        /// Line id.
        line_id: String,
    },
    /// Set a line's quantity; zero or less removes it.
    Set {
        /// Line id.
        line_id: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Add one to a line.
    Incr {
        /// Line id.
        line_id: String,
    },
    /// Subtract one from a line.
    Decr {
        /// Line id.
        line_id: String,
    },
    /// Remove every line.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Show lines and totals.
    Show,
}

/// Arguments for the wishlist command.
#[derive(Args)]
pub struct WishlistArgs {
    #[command(subcommand)]
    pub command: WishlistCommand,
}

#[derive(Subcommand)]
pub enum WishlistCommand {
    /// Save a product.
    Add {
        #[command(flatten)]
        product: ProductArgs,
    },
    /// Remove a saved product.
    Remove {
        /// Product id.
        product_id: String,
    },
    /// Save the product if absent, remove it otherwise.
    Toggle {
        #[command(flatten)]
        product: ProductArgs,
    },
    /// Move a saved product into the cart.
    MoveToCart {
        /// Product id.
        product_id: String,

        /// Variant as type=value.
        #[arg(long)]
        variant: Option<VariantSelector>,
    },
    /// List saved products.
    List,
    /// Remove everything.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
