//! Application handlers.
//!
//! One command handler per user-initiated operation. Each handler runs to
//! completion within a single event, reading and writing through
//! [`LocalStore`](crate::application::LocalStore).

pub mod auth;
pub mod engagement;

pub use auth::{
    LogInCommand, LogInHandler, LogOutHandler, RestoreSessionHandler, SignUpCommand, SignUpHandler,
};
pub use engagement::{
    AddCommentCommand, AddCommentHandler, ToggleFavoriteCommand, ToggleFavoriteHandler,
};
