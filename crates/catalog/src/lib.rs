//! `shopsmart-catalog` — product catalog and query engine.
//!
//! The catalog is an immutable, id-unique set of products fixed at process
//! start. The engine in [`engine`] is a pure function of `(catalog, query)`
//! producing an ordered [`ResultView`]; it owns no state and never renders.

pub mod catalog;
pub mod engine;
pub mod product;
pub mod query;
pub mod seed;
pub mod view;

pub use catalog::Catalog;
pub use product::Product;
pub use query::{Query, SortKey};
pub use seed::seed_catalog;
pub use view::ResultView;
