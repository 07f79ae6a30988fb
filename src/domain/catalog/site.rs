//! Heritage site records and their category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::SiteId;

/// The fixed set of site categories present in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Architecture,
    Religious,
    Historical,
    Modern,
    Colonial,
    Natural,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 6] = [
        Category::Architecture,
        Category::Religious,
        Category::Historical,
        Category::Modern,
        Category::Colonial,
        Category::Natural,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Architecture => "Architecture",
            Category::Religious => "Religious",
            Category::Historical => "Historical",
            Category::Modern => "Modern",
            Category::Colonial => "Colonial",
            Category::Natural => "Natural",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown site category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A static record describing one heritage location.
///
/// The catalogue never changes at runtime; all per-user state (favorites,
/// comments) lives outside it, keyed by [`SiteId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub id: SiteId,
    pub name: &'static str,
    pub location: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub image: &'static str,
    pub heritage: &'static str,
    pub visit_info: &'static str,
    pub opening_hours: Option<&'static str>,
    pub website: Option<&'static str>,
    pub price: Option<&'static str>,
    pub map_url: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_its_own_display_form() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "Culinary".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("Culinary".to_string()));
    }
}
