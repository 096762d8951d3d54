//! The catalog query engine.
//!
//! Every operation is a total, stateless function: filters preserve catalog
//! order, sorting returns a fresh view, and nothing here mutates the catalog
//! or calls back into rendering. The UI layer owns all retained state.

use crate::catalog::Catalog;
use crate::product::Product;
use crate::query::{Query, SortKey};
use crate::view::ResultView;

/// Case-insensitive substring search on name OR description.
///
/// Empty or whitespace-only text acts as "no filter". The needle is folded
/// once; product fields are folded per comparison. No match yields an empty
/// view, never an error.
pub fn search<'a>(catalog: &'a Catalog, text: &str) -> ResultView<'a> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return ResultView::new(catalog.iter().collect());
    }
    ResultView::new(catalog.iter().filter(|p| p.matches_text(&needle)).collect())
}

/// Exact (case-sensitive) category filter. Empty category is the identity.
pub fn filter_by_category<'a>(catalog: &'a Catalog, category: &str) -> ResultView<'a> {
    if category.is_empty() {
        return ResultView::new(catalog.iter().collect());
    }
    ResultView::new(
        catalog
            .iter()
            .filter(|p| p.in_category(category))
            .collect(),
    )
}

/// Logical AND of the text and category predicates, preserving catalog
/// order. Equivalent to applying either filter first; both predicates are
/// independent.
pub fn combine<'a>(catalog: &'a Catalog, text: &str, category: &str) -> ResultView<'a> {
    let needle = text.trim().to_lowercase();
    ResultView::new(
        catalog
            .iter()
            .filter(|p| needle.is_empty() || p.matches_text(&needle))
            .filter(|p| category.is_empty() || p.in_category(category))
            .collect(),
    )
}

/// Sort a view into a fresh one; the input is left untouched.
///
/// Price keys compare numerically; ties keep their input order (stable
/// sort). Name keys compare case-folded strings lexicographically; std has
/// no locale collation, so this is a code-point ordering after folding.
/// `None` is the identity order.
pub fn sort<'a>(view: &ResultView<'a>, key: Option<SortKey>) -> ResultView<'a> {
    let mut items: Vec<&'a Product> = view.products().to_vec();
    match key {
        None => {}
        Some(SortKey::PriceAscending) => items.sort_by_key(|p| p.price_cents()),
        Some(SortKey::PriceDescending) => {
            items.sort_by(|a, b| b.price_cents().cmp(&a.price_cents()));
        }
        Some(SortKey::NameAscending) => {
            items.sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()));
        }
        Some(SortKey::NameDescending) => {
            items.sort_by(|a, b| b.name().to_lowercase().cmp(&a.name().to_lowercase()));
        }
    }
    ResultView::new(items)
}

/// Evaluate a full query: filter, then sort. This is the one-call form the
/// UI layer uses on every search/filter/sort action.
pub fn evaluate<'a>(catalog: &'a Catalog, query: &Query) -> ResultView<'a> {
    let filtered = combine(
        catalog,
        query.text.as_deref().unwrap_or(""),
        query.category.as_deref().unwrap_or(""),
    );
    sort(&filtered, query.sort)
}
