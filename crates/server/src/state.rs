use std::sync::Arc;

use service::messages::{JsonFileMessageRepository, MessageRepository, MessageService};

/// Shared handler state: the controller only ever talks to the service.
#[derive(Clone)]
pub struct AppState {
    pub messages: Arc<MessageService<dyn MessageRepository>>,
}

impl AppState {
    pub fn new(messages: Arc<MessageService<dyn MessageRepository>>) -> Self {
        Self { messages }
    }

    /// Wire repository -> service for a store file at `path`.
    pub fn from_file<P: Into<std::path::PathBuf>>(path: P) -> Self {
        let repo: Arc<dyn MessageRepository> = Arc::new(JsonFileMessageRepository::new(path));
        Self::new(Arc::new(MessageService::new(repo)))
    }
}
