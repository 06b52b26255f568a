use std::{collections::HashMap, fmt, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use rand::Rng;
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::messages::domain::Message;
use crate::storage::JsonMapStore;

/// Generated ids are integers in `0..MAX_GENERATED_ID`.
pub const MAX_GENERATED_ID: u32 = 999;

pub type IdGenerator = Arc<dyn Fn() -> String + Send + Sync>;

/// Random id in `[0, 999)` rendered as a decimal string.
pub fn random_id() -> String {
    rand::thread_rng().gen_range(0..MAX_GENERATED_ID).to_string()
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn find_one(&self, id: &str) -> Result<Option<Message>, ServiceError>;
    async fn find_all(&self) -> Result<HashMap<String, Message>, ServiceError>;
    async fn create(&self, content: &str) -> Result<Message, ServiceError>;
}

/// Repository that keeps every message in one JSON object file.
///
/// `create` does not check for an existing entry with the generated id;
/// a collision replaces the older message.
pub struct JsonFileMessageRepository {
    store: JsonMapStore<String, Message>,
    next_id: IdGenerator,
}

impl JsonFileMessageRepository {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { store: JsonMapStore::new(path), next_id: Arc::new(random_id) }
    }

    /// Replace the id source, e.g. to force collisions in tests.
    pub fn with_id_generator(mut self, next_id: IdGenerator) -> Self {
        self.next_id = next_id;
        self
    }
}

impl fmt::Debug for JsonFileMessageRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonFileMessageRepository")
            .field("path", &self.store.path())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MessageRepository for JsonFileMessageRepository {
    async fn find_one(&self, id: &str) -> Result<Option<Message>, ServiceError> {
        self.store.get(&id.to_string()).await
    }

    async fn find_all(&self) -> Result<HashMap<String, Message>, ServiceError> {
        self.store.load().await
    }

    async fn create(&self, content: &str) -> Result<Message, ServiceError> {
        let id = (self.next_id)();
        let message = Message::new(id.clone(), content);
        let (replaced, total) = self
            .store
            .update_map(|messages| {
                let replaced = messages.insert(id.clone(), message.clone()).is_some();
                Ok((replaced, messages.len()))
            })
            .await?;
        if replaced {
            debug!(%id, "generated id already in use; replaced message");
        }
        info!(%id, total, "message created");
        Ok(message)
    }
}
