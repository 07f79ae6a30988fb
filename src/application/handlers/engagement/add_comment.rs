//! AddCommentHandler - appends to the global comment log.

use crate::application::LocalStore;
use crate::domain::account::Session;
use crate::domain::comment::Comment;
use crate::domain::foundation::SiteId;
use crate::ports::StorageError;

/// Command carrying the target site and the comment body.
#[derive(Debug, Clone)]
pub struct AddCommentCommand {
    pub site_id: SiteId,
    pub text: String,
}

/// Handler for comment submission.
///
/// The log is append-only: comments are never edited or deleted, the text
/// is stored as submitted, and the site id is not checked against the
/// catalogue.
#[derive(Clone)]
pub struct AddCommentHandler {
    store: LocalStore,
}

impl AddCommentHandler {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Returns the stored comment, or `None` when no session was passed
    /// in, in which case nothing is read or written.
    pub async fn handle(
        &self,
        cmd: AddCommentCommand,
        session: Option<&Session>,
    ) -> Result<Option<Comment>, StorageError> {
        let Some(session) = session else {
            tracing::warn!(site_id = %cmd.site_id, "comment declined: not logged in");
            return Ok(None);
        };

        let comment = Comment::new(cmd.site_id, session.username.clone(), cmd.text);

        let mut log = self.store.load_comments().await?;
        log.push(comment.clone());
        self.store.store_comments(&log).await?;

        Ok(Some(comment))
    }
}
