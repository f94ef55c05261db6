//! Shared types for the storefront checkout crates.

mod types;

pub use types::CheckoutId;
