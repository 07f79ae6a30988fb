//! Narrative story records.

use crate::domain::foundation::StoryId;

/// A static record containing narrative content about a cultural topic.
///
/// `content` is rich text (HTML fragments) rendered verbatim by the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub id: StoryId,
    pub title: &'static str,
    pub category: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    pub read_time: &'static str,
    pub content: &'static str,
}
