//! Wishlist module.

mod wishlist;

pub use wishlist::Wishlist;
