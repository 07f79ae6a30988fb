//! Filter/search engine over the site catalogue.
//!
//! A pure function of (site sequence, category, free-text query, location)
//! producing the visible, order-preserving subset. All three predicates are
//! ANDed. No ranking, no fuzzy matching, no pagination.

use super::{Category, Site};
use crate::domain::account::Session;

/// The sentinel shown for "no location restriction" in option lists.
pub const LOCATION_ALL: &str = "all";

/// Category restriction: everything, or one exact category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

/// Location restriction: everything, or one exact location string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocationFilter {
    #[default]
    All,
    Only(String),
}

/// The current filter criteria.
#[derive(Debug, Clone, Default)]
pub struct SiteFilter {
    pub category: CategoryFilter,
    pub query: String,
    pub location: LocationFilter,
}

impl SiteFilter {
    /// A filter that matches every site.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = LocationFilter::Only(location.into());
        self
    }

    /// Whether one site passes all three predicates.
    pub fn matches(&self, site: &Site) -> bool {
        self.matches_category(site) && self.matches_query(site) && self.matches_location(site)
    }

    /// Applies the filter, preserving the source order.
    pub fn apply<'a>(&self, sites: &'a [Site]) -> Vec<&'a Site> {
        sites.iter().filter(|site| self.matches(site)).collect()
    }

    fn matches_category(&self, site: &Site) -> bool {
        match self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => site.category == category,
        }
    }

    fn matches_location(&self, site: &Site) -> bool {
        match &self.location {
            LocationFilter::All => true,
            LocationFilter::Only(location) => site.location == location,
        }
    }

    /// Case-insensitive substring match against name, description, or
    /// location. An empty or whitespace-only query matches everything.
    fn matches_query(&self, site: &Site) -> bool {
        if self.query.trim().is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        site.name.to_lowercase().contains(&needle)
            || site.description.to_lowercase().contains(&needle)
            || site.location.to_lowercase().contains(&needle)
    }
}

/// The selectable location list: every location present in the catalogue,
/// deduplicated in first-seen order, with the [`LOCATION_ALL`] sentinel
/// prepended.
pub fn location_options(sites: &[Site]) -> Vec<&str> {
    let mut options = vec![LOCATION_ALL];
    for site in sites {
        if !options.contains(&site.location) {
            options.push(site.location);
        }
    }
    options
}

/// The catalogue restricted to the session's favorites, in catalogue order.
pub fn favorite_sites<'a>(sites: &'a [Site], session: &Session) -> Vec<&'a Site> {
    sites
        .iter()
        .filter(|site| session.is_favorite(site.id))
        .collect()
}
