//! Rendering seam between the query engine and the terminal.

use std::io::{self, Write};

use shopsmart_catalog::ResultView;

/// Anything that can display a result view.
///
/// The engine never calls this; callers evaluate a query and hand the view
/// over. Debouncing, highlighting and other presentation concerns end here.
pub trait RenderSink {
    fn render_view(&mut self, title: &str, view: &ResultView<'_>) -> io::Result<()>;
}

/// Plain-text renderer writing product cards to any writer.
pub struct ConsoleRenderer<W: Write> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for ConsoleRenderer<W> {
    fn render_view(&mut self, title: &str, view: &ResultView<'_>) -> io::Result<()> {
        writeln!(self.out, "{title}")?;
        if view.is_empty() {
            writeln!(self.out, "No products found matching your search.")?;
            return Ok(());
        }

        writeln!(self.out, "Found {} products matching your search.", view.len())?;
        writeln!(self.out)?;
        for product in view {
            writeln!(
                self.out,
                "{} ({}, {})",
                product.name(),
                product.price_display(),
                product.category()
            )?;
            if !product.description().is_empty() {
                writeln!(self.out, "    {}", product.description())?;
            }
        }
        Ok(())
    }
}
