//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected files exist at startup.

use std::path::Path;

use tracing::warn;

/// Ensure a JSON object file exists at `path`, seeding it with `{}` when absent.
/// Returns `true` if the file was created.
///
/// An existing file is never touched, even if its contents are not valid JSON.
pub async fn ensure_json_file(path: &Path) -> anyhow::Result<bool> {
    if tokio::fs::metadata(path).await.is_ok() {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    }
    warn!(path = %path.display(), "backing file not found; seeding empty store");
    tokio::fs::write(path, b"{}")
        .await
        .map_err(|e| anyhow::anyhow!("cannot write {}: {e}", path.display()))?;
    Ok(true)
}
