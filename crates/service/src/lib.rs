//! Service layer for the message store.
//! - `storage` holds the generic JSON file map used as a pseudo-database.
//! - `messages` holds the model, repository and pass-through service.
//! - Errors are surfaced as `ServiceError` and mapped to HTTP by the server crate.

pub mod errors;
pub mod runtime;
pub mod storage;
pub mod messages;
pub mod validation;
