use serde::{Deserialize, Serialize};

use shopsmart_core::{DomainError, ProductId};

/// A single catalog entry.
///
/// # Invariants
/// - `name` is non-empty.
/// - `category` is a non-empty flat tag (e.g. "electronics", "home"); it is
///   deliberately a plain string, not an enum, so category filtering stays an
///   exact string match against whatever tags the catalog carries.
/// - `price_cents` holds the price in the smallest currency unit; display is
///   always two-decimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price_cents: u64,
    category: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price_cents: u64,
        category: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let category = category.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if category.trim().is_empty() {
            return Err(DomainError::validation("product category cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            description: description.into(),
            price_cents,
            category,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price_cents(&self) -> u64 {
        self.price_cents
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Two-decimal dollar display, e.g. `$199.99`.
    pub fn price_display(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }

    /// Case-insensitive substring match on name OR description.
    ///
    /// `needle` must already be lower-cased by the caller; product fields are
    /// folded per comparison so mixed-case catalog entries still match.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Exact, case-sensitive category match.
    pub(crate) fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(raw: u32) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    #[test]
    fn new_product_rejects_empty_name() {
        let err = Product::new(pid(1), "   ", "desc", 999, "home").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn new_product_rejects_empty_category() {
        let err = Product::new(pid(1), "Blender", "", 999, "").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn empty_description_is_allowed() {
        let p = Product::new(pid(1), "Blender", "", 6999, "home").unwrap();
        assert_eq!(p.description(), "");
    }

    #[test]
    fn price_display_is_two_decimal() {
        let p = Product::new(pid(1), "Yoga Mat", "", 2599, "fitness").unwrap();
        assert_eq!(p.price_display(), "$25.99");

        let q = Product::new(pid(2), "Sticker", "", 5, "accessories").unwrap();
        assert_eq!(q.price_display(), "$0.05");
    }

    #[test]
    fn text_match_folds_product_fields() {
        let p = Product::new(pid(1), "Premium Headphones", "Noise-canceling.", 19999, "electronics")
            .unwrap();
        assert!(p.matches_text("premium"));
        assert!(p.matches_text("noise"));
        // Needle is expected pre-folded; an upper-case needle never matches.
        assert!(!p.matches_text("PREMIUM"));
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let p = Product::new(pid(1), "Blender", "", 6999, "home").unwrap();
        assert!(p.in_category("home"));
        assert!(!p.in_category("Home"));
    }

    #[test]
    fn serializes_transparently() {
        let p = Product::new(pid(7), "Running Shoes", "Lightweight.", 11999, "clothing").unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"id\":7"));
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
