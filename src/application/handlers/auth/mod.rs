//! Auth handlers: sign-up, log-in, log-out, session restore.

mod log_in;
mod log_out;
mod restore_session;
mod sign_up;

pub use log_in::{LogInCommand, LogInHandler};
pub use log_out::LogOutHandler;
pub use restore_session::RestoreSessionHandler;
pub use sign_up::{SignUpCommand, SignUpHandler};
