//! The append-only comment log.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SiteId, Timestamp};

/// One entry in the global comment log.
///
/// `username` is a snapshot of the authoring account's name, not a live
/// reference. `site_id` is not checked against the catalogue; a comment on
/// an unknown site is kept but never surfaces through [`for_site`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub site_id: SiteId,
    pub username: String,
    pub text: String,
    pub timestamp: Timestamp,
}

impl Comment {
    /// Creates a comment stamped with the current time.
    pub fn new(site_id: SiteId, username: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            site_id,
            username: username.into(),
            text: text.into(),
            timestamp: Timestamp::now(),
        }
    }
}

/// Comments for one site, in log (append) order.
pub fn for_site(log: &[Comment], site_id: SiteId) -> Vec<&Comment> {
    log.iter().filter(|c| c.site_id == site_id).collect()
}
