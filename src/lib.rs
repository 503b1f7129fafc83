//! # Object-Oriented Concepts in Rust
//!
//! Small, independent illustrations of the usual class-based ideas and how
//! Rust expresses each one:
//!
//! ## Visibility
//! - Public fields and methods
//! - Module-private fields behind a public method
//! - `pub(super)` as the "protected" stand-in
//!
//! ## Behaviour sharing
//! - A trait with a default method instead of a base class
//! - Overriding the default in one implementor
//! - Dynamic dispatch over `&dyn Speaker`
//!
//! ## Accessors
//! - Getters, setters and a derived getter
//!
//! ## Receivers
//! - Free functions have no `self`, methods do
//!
//! ## Catalog lookup
//! - Immutable `Book` records in an ordered `Catalog`
//! - First-match lookup returning `Option<&Book>`
//! - Associated ("static") functions
//! - Loading a catalog from JSON or TOML
//!
//! Run the whole tour with: `cargo run --bin walkthrough`

pub mod animal;
pub mod catalog;
pub mod error;
pub mod human;
pub mod loader;
pub mod receiver;
pub mod report;
pub mod visibility;

pub use catalog::{find_book, Book, Catalog};
pub use error::CatalogError;
pub use loader::CatalogLoader;
