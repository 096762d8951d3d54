//! In-memory shopping cart.

use serde::{Deserialize, Serialize};

use shopsmart_catalog::Catalog;
use shopsmart_core::{DomainError, DomainResult, ProductId};

/// One product in the cart, with a snapshot of name and unit price taken at
/// add time (the catalog is immutable, so snapshots never go stale).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    product_id: ProductId,
    name: String,
    unit_price_cents: u64,
    quantity: u32,
}

impl CartLine {
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price_cents(&self) -> u64 {
        self.unit_price_cents
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_total_cents(&self) -> u64 {
        self.unit_price_cents * u64::from(self.quantity)
    }
}

/// The current cart. Adding the same product twice merges into one line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product, looked up in the catalog by id.
    pub fn add(&mut self, catalog: &Catalog, id: ProductId) -> DomainResult<()> {
        let product = catalog.get(id).ok_or(DomainError::NotFound)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product_id: id,
                name: product.name().to_string(),
                unit_price_cents: product.price_cents(),
                quantity: 1,
            });
        }
        Ok(())
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(CartLine::quantity).sum()
    }

    pub fn total_cents(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total_cents).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopsmart_catalog::seed_catalog;

    fn pid(raw: u32) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    #[test]
    fn add_snapshots_name_and_price() {
        let catalog = seed_catalog().unwrap();
        let mut cart = Cart::new();

        cart.add(&catalog, pid(13)).unwrap();
        let line = &cart.lines()[0];
        assert_eq!(line.name(), "Blender");
        assert_eq!(line.unit_price_cents(), 6999);
        assert_eq!(line.quantity(), 1);
    }

    #[test]
    fn adding_twice_merges_into_one_line() {
        let catalog = seed_catalog().unwrap();
        let mut cart = Cart::new();

        cart.add(&catalog, pid(15)).unwrap();
        cart.add(&catalog, pid(15)).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_cents(), 2 * 2599);
    }

    #[test]
    fn unknown_product_is_not_found() {
        let catalog = seed_catalog().unwrap();
        let mut cart = Cart::new();
        assert_eq!(cart.add(&catalog, pid(99)), Err(DomainError::NotFound));
        assert!(cart.is_empty());
    }

    #[test]
    fn total_spans_multiple_lines() {
        let catalog = seed_catalog().unwrap();
        let mut cart = Cart::new();

        cart.add(&catalog, pid(12)).unwrap(); // $39.99
        cart.add(&catalog, pid(13)).unwrap(); // $69.99

        assert_eq!(cart.total_cents(), 3999 + 6999);
        assert_eq!(cart.item_count(), 2);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_cents(), 0);
    }
}
