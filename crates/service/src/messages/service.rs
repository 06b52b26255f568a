use std::collections::HashMap;
use std::sync::Arc;

use tracing::instrument;

use crate::errors::ServiceError;
use crate::messages::domain::Message;
use crate::messages::repository::MessageRepository;

/// Application service for messages.
/// Forwards every call to the repository unchanged.
pub struct MessageService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: MessageRepository + ?Sized> MessageService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn find_one(&self, id: &str) -> Result<Option<Message>, ServiceError> { self.repo.find_one(id).await }

    pub async fn find_all(&self) -> Result<HashMap<String, Message>, ServiceError> { self.repo.find_all().await }

    #[instrument(skip(self, content), fields(content_len = content.len()))]
    pub async fn create(&self, content: &str) -> Result<Message, ServiceError> {
        self.repo.create(content).await
    }
}
