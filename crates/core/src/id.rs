//! Strongly-typed identifiers used across the domain.

use core::num::NonZeroU32;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product in the catalog.
///
/// Positive integer, stable for the lifetime of the process. The catalog is
/// seeded with fixed ids, so there is no generated-id path here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(NonZeroU32);

impl ProductId {
    /// Build an id from a raw integer. Zero is rejected.
    pub fn new(raw: u32) -> Result<Self, DomainError> {
        NonZeroU32::new(raw)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_id("ProductId: must be positive"))
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u32 = s
            .parse()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero() {
        assert!(matches!(ProductId::new(0), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn parses_from_str() {
        let id: ProductId = "15".parse().unwrap();
        assert_eq!(id.get(), 15);
        assert_eq!(id.to_string(), "15");
    }

    #[test]
    fn rejects_garbage() {
        assert!("abc".parse::<ProductId>().is_err());
        assert!("-3".parse::<ProductId>().is_err());
    }
}
