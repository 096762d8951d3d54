//! `shopsmart-core` — domain foundation building blocks.
//!
//! Pure domain primitives shared by the catalog and session crates. No
//! rendering, storage, or network concerns live here.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
