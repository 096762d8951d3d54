use serde::{Deserialize, Serialize};

/// Sort order applied after filtering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceAscending,
    PriceDescending,
    NameAscending,
    NameDescending,
}

impl SortKey {
    /// Parse a sort token from the UI layer.
    ///
    /// Unrecognized tokens (including the empty string) yield `None`, which
    /// the engine treats as "keep current order". An unknown key is never an
    /// error.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "price-asc" => Some(Self::PriceAscending),
            "price-desc" => Some(Self::PriceDescending),
            "name-asc" => Some(Self::NameAscending),
            "name-desc" => Some(Self::NameDescending),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceAscending => "price-asc",
            Self::PriceDescending => "price-desc",
            Self::NameAscending => "name-asc",
            Self::NameDescending => "name-desc",
        }
    }
}

/// A transient catalog query.
///
/// Built fresh from current UI input on each action and discarded after the
/// result view is produced; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Case-insensitive substring filter on name or description.
    pub text: Option<String>,
    /// Exact-match category tag.
    pub category: Option<String>,
    /// Sort order; `None` keeps catalog order.
    pub sort: Option<SortKey>,
}

impl Query {
    /// Build a query from raw form values, mapping empty strings to "no
    /// filter". The sort token goes through [`SortKey::parse`], so unknown
    /// values degrade to catalog order.
    pub fn from_form(text: &str, category: &str, sort_token: &str) -> Self {
        let text = text.trim();
        Self {
            text: (!text.is_empty()).then(|| text.to_string()),
            category: (!category.is_empty()).then(|| category.to_string()),
            sort: SortKey::parse(sort_token),
        }
    }

    /// True when the query matches the whole catalog in catalog order.
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_none() && self.category.is_none() && self.sort.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_four_sort_tokens() {
        assert_eq!(SortKey::parse("price-asc"), Some(SortKey::PriceAscending));
        assert_eq!(SortKey::parse("price-desc"), Some(SortKey::PriceDescending));
        assert_eq!(SortKey::parse("name-asc"), Some(SortKey::NameAscending));
        assert_eq!(SortKey::parse("name-desc"), Some(SortKey::NameDescending));
    }

    #[test]
    fn unknown_sort_token_is_none_not_error() {
        assert_eq!(SortKey::parse(""), None);
        assert_eq!(SortKey::parse("rating-desc"), None);
        assert_eq!(SortKey::parse("PRICE-ASC"), None);
    }

    #[test]
    fn sort_key_round_trips_through_token() {
        for key in [
            SortKey::PriceAscending,
            SortKey::PriceDescending,
            SortKey::NameAscending,
            SortKey::NameDescending,
        ] {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
    }

    #[test]
    fn from_form_maps_blanks_to_no_filter() {
        let q = Query::from_form("  ", "", "nonsense");
        assert!(q.is_unfiltered());

        let q = Query::from_form(" speaker ", "electronics", "price-asc");
        assert_eq!(q.text.as_deref(), Some("speaker"));
        assert_eq!(q.category.as_deref(), Some("electronics"));
        assert_eq!(q.sort, Some(SortKey::PriceAscending));
    }
}
