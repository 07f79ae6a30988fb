//! Engagement handlers: favorites and comments.
//!
//! Both operations require an explicitly passed session and decline
//! silently without one, matching the original front-end behavior.

mod add_comment;
mod toggle_favorite;

pub use add_comment::{AddCommentCommand, AddCommentHandler};
pub use toggle_favorite::{ToggleFavoriteCommand, ToggleFavoriteHandler};
