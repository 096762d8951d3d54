//! `shopsmart-storefront` — console front end for the catalog.
//!
//! The engine returns data; this crate owns the render seam. Results reach
//! the terminal through a [`render::RenderSink`], never the other way
//! around.

pub mod app;
pub mod render;

pub use app::{Options, run};
pub use render::{ConsoleRenderer, RenderSink};
