//! The static heritage catalogue and its filter engine.
//!
//! The catalogue is immutable after startup. Per-user state (favorites,
//! comments) never lives here; it references sites by [`SiteId`] through
//! the persistence layer.
//!
//! [`SiteId`]: crate::domain::foundation::SiteId

mod data;
mod filter;
mod site;
mod story;

pub use data::{site_by_id, story_by_id, SITES, STORIES};
pub use filter::{
    favorite_sites, location_options, CategoryFilter, LocationFilter, SiteFilter, LOCATION_ALL,
};
pub use site::{Category, Site, UnknownCategory};
pub use story::Story;
