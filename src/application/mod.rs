//! Application layer - Commands and Handlers.
//!
//! Orchestrates domain operations over the persistence port. The session
//! is always an explicit argument, never ambient state.

pub mod handlers;
mod local_store;

pub use handlers::{
    AddCommentCommand, AddCommentHandler, LogInCommand, LogInHandler, LogOutHandler,
    RestoreSessionHandler, SignUpCommand, SignUpHandler, ToggleFavoriteCommand,
    ToggleFavoriteHandler,
};
pub use local_store::LocalStore;
