//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so binary crates can prepare the
//! backing file without depending directly on `common`.

use std::path::Path;

/// Seed the backing file with an empty store if it is missing.
pub async fn ensure_store_file<P: AsRef<Path>>(path: P) -> anyhow::Result<bool> {
    common::env::ensure_json_file(path.as_ref()).await
}
