//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `account` - Accounts, sessions, and the auth error taxonomy
//! - `catalog` - The static site/story catalogue and the filter engine
//! - `comment` - The append-only comment log records

pub mod account;
pub mod catalog;
pub mod comment;
pub mod foundation;
