//! Accounts and the authenticated session.
//!
//! An [`Account`] is the persisted record inside the account collection; a
//! [`Session`] is the password-stripped view of one account that callers
//! pass explicitly to every operation requiring authentication. At most one
//! session is persisted at a time.

mod errors;

pub use errors::AuthError;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SiteId;

/// A registered account as stored in the persisted account collection.
///
/// The password is stored and compared in plain text for parity with the
/// original front-end. That is a known defect of the source system, kept
/// here so existing persisted collections keep working; see DESIGN.md.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub favorites: Vec<SiteId>,
}

impl Account {
    /// Creates a fresh account with an empty favorites set.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            favorites: Vec::new(),
        }
    }

    /// Returns the password-stripped session view of this account.
    pub fn to_session(&self) -> Session {
        Session {
            username: self.username.clone(),
            favorites: self.favorites.clone(),
        }
    }
}

/// The currently authenticated account, password omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    #[serde(default)]
    pub favorites: Vec<SiteId>,
}

impl Session {
    /// Checks whether a site is in this session's favorites set.
    pub fn is_favorite(&self, site_id: SiteId) -> bool {
        self.favorites.contains(&site_id)
    }

    /// Removes the site from the favorites set if present, adds it otherwise.
    ///
    /// Membership is guaranteed after the call; position within the
    /// sequence is not. The sequence never holds duplicates.
    pub fn toggle_favorite(&mut self, site_id: SiteId) {
        if let Some(pos) = self.favorites.iter().position(|id| *id == site_id) {
            self.favorites.remove(pos);
        } else {
            self.favorites.push(site_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_account_has_empty_favorites() {
        let account = Account::new("alice", "pw1");
        assert!(account.favorites.is_empty());
    }

    #[test]
    fn to_session_strips_password() {
        let account = Account::new("alice", "pw1");
        let session = account.to_session();
        assert_eq!(session.username, "alice");
        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("pw1"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn toggle_removes_then_re_adds() {
        let mut session = Session {
            username: "alice".to_string(),
            favorites: vec![SiteId::new(3), SiteId::new(7)],
        };

        session.toggle_favorite(SiteId::new(3));
        assert_eq!(session.favorites, vec![SiteId::new(7)]);

        session.toggle_favorite(SiteId::new(3));
        assert_eq!(session.favorites, vec![SiteId::new(7), SiteId::new(3)]);
    }

    #[test]
    fn account_deserializes_without_favorites_field() {
        let account: Account =
            serde_json::from_str(r#"{"username":"bob","password":"x"}"#).unwrap();
        assert!(account.favorites.is_empty());
    }

    proptest! {
        /// Toggling the same site twice restores the original membership set.
        #[test]
        fn toggle_is_its_own_inverse(
            ids in proptest::collection::btree_set(0u32..64, 0..12),
            site in 0u32..64,
        ) {
            let favorites: Vec<SiteId> = ids.into_iter().map(SiteId::new).collect();
            let mut session = Session {
                username: "prop".to_string(),
                favorites: favorites.clone(),
            };

            session.toggle_favorite(SiteId::new(site));
            session.toggle_favorite(SiteId::new(site));

            let mut before: Vec<SiteId> = favorites;
            let mut after = session.favorites;
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }

        /// A toggled session never holds duplicate site ids.
        #[test]
        fn toggle_never_duplicates(
            ids in proptest::collection::btree_set(0u32..64, 0..12),
            site in 0u32..64,
        ) {
            let mut session = Session {
                username: "prop".to_string(),
                favorites: ids.into_iter().map(SiteId::new).collect(),
            };
            session.toggle_favorite(SiteId::new(site));

            let mut deduped = session.favorites.clone();
            deduped.sort();
            deduped.dedup();
            prop_assert_eq!(deduped.len(), session.favorites.len());
        }
    }
}
