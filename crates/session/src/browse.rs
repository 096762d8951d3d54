//! Retained browse state for the products page.
//!
//! The UI keeps the last applied [`Query`] and re-derives the visible
//! product view from `(catalog, query)` on demand. Sorting therefore acts
//! on the retained subset directly; domain data is never reconstructed from
//! rendered markup.

use serde::{Deserialize, Serialize};

use shopsmart_catalog::{Catalog, Query, ResultView, SortKey, engine};

/// The products page's current query, owned by the UI layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseState {
    query: Query,
}

impl BrowseState {
    /// Fresh state: whole catalog, catalog order.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Apply the combined search form. Replaces text and category filters
    /// and drops any previous sort, matching a fresh form submission.
    pub fn submit_search(&mut self, text: &str, category: &str) {
        self.query = Query::from_form(text, category, "");
    }

    /// Apply a category link: category only, no text filter, catalog order.
    pub fn filter_category(&mut self, category: &str) {
        self.query = Query::from_form("", category, "");
    }

    /// Re-sort whatever the current filters select. The filtered subset is
    /// retained in the query, so this never needs to consult the renderer.
    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.query.sort = sort;
    }

    /// Back to the whole catalog in catalog order.
    pub fn reset(&mut self) {
        self.query = Query::default();
    }

    /// Evaluate the retained query against the catalog.
    pub fn results<'a>(&self, catalog: &'a Catalog) -> ResultView<'a> {
        engine::evaluate(catalog, &self.query)
    }

    /// Heading for the products page.
    pub fn title(&self) -> String {
        match (self.query.text.as_deref(), self.query.category.as_deref()) {
            (Some(text), Some(category)) => format!("Search: \"{text}\" in {category}"),
            (Some(text), None) => format!("Search: \"{text}\""),
            (None, Some(category)) => capitalize(category),
            (None, None) => "All Products".to_string(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopsmart_catalog::seed_catalog;

    #[test]
    fn fresh_state_shows_whole_catalog() {
        let catalog = seed_catalog().unwrap();
        let browse = BrowseState::new();
        assert_eq!(browse.results(&catalog).len(), 15);
        assert_eq!(browse.title(), "All Products");
    }

    #[test]
    fn sorting_applies_to_the_retained_subset() {
        let catalog = seed_catalog().unwrap();
        let mut browse = BrowseState::new();

        browse.filter_category("home");
        browse.set_sort(SortKey::parse("price-asc"));

        let view = browse.results(&catalog);
        assert_eq!(
            view.names(),
            vec!["Non-stick Pan", "Blender", "Cutlery Set", "Coffee Maker"]
        );
    }

    #[test]
    fn new_search_drops_the_previous_sort() {
        let catalog = seed_catalog().unwrap();
        let mut browse = BrowseState::new();

        browse.set_sort(SortKey::parse("name-desc"));
        browse.submit_search("", "electronics");

        let view = browse.results(&catalog);
        assert_eq!(view.get(0).unwrap().name(), "Premium Headphones");
        assert!(browse.query().sort.is_none());
    }

    #[test]
    fn titles_follow_the_form_inputs() {
        let mut browse = BrowseState::new();

        browse.submit_search("speaker", "electronics");
        assert_eq!(browse.title(), "Search: \"speaker\" in electronics");

        browse.submit_search("speaker", "");
        assert_eq!(browse.title(), "Search: \"speaker\"");

        browse.filter_category("home");
        assert_eq!(browse.title(), "Home");

        browse.reset();
        assert_eq!(browse.title(), "All Products");
    }

    #[test]
    fn state_survives_repeated_evaluation() {
        let catalog = seed_catalog().unwrap();
        let mut browse = BrowseState::new();
        browse.submit_search("er", "home");

        let first = browse.results(&catalog).ids();
        let second = browse.results(&catalog).ids();
        assert_eq!(first, second);
    }
}
