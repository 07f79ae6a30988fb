//! Shared domain primitives.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{SiteId, StoryId};
pub use timestamp::Timestamp;
