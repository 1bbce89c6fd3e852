//! Catalog domain module.
//!
//! This crate contains business rules for the product catalog, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod product;
pub mod rules;

pub use catalog::Catalog;
pub use product::{Field, Product, ProductDraft, ProductId};
pub use rules::{RuleSet, TitleLookup, Violations};
