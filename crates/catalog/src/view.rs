use shopsmart_core::ProductId;

use crate::product::Product;

/// An ordered, read-only projection of catalog products.
///
/// Views borrow from the catalog; evaluating a query produces a fresh view
/// every time, and sorting a view returns a new one rather than patching the
/// input in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView<'a> {
    items: Vec<&'a Product>,
}

impl<'a> ResultView<'a> {
    pub(crate) fn new(items: Vec<&'a Product>) -> Self {
        Self { items }
    }

    pub fn products(&self) -> &[&'a Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Product> {
        self.items.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.items.iter().copied()
    }

    /// Ids in view order. Handy for equality assertions and for UI layers
    /// that key rendered entries by id.
    pub fn ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|p| p.id()).collect()
    }

    /// Names in view order.
    pub fn names(&self) -> Vec<&'a str> {
        self.items.iter().map(|p| p.name()).collect()
    }
}

impl<'a, 'b> IntoIterator for &'b ResultView<'a> {
    type Item = &'a Product;
    type IntoIter = std::iter::Copied<std::slice::Iter<'b, &'a Product>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().copied()
    }
}
