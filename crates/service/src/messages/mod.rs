//! Message storage: model, file-backed repository and the service in front of it.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{CreateMessageInput, Message};
pub use repository::{JsonFileMessageRepository, MessageRepository};
pub use service::MessageService;
