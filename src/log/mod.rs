use std::path::{Path, PathBuf};

use chrono::Utc;
use fs_err as fs;
use serde_json::json;
use uuid::Uuid;

/// Persist one request/reply exchange for offline inspection:
/// `.botforge/tx/<request-id>/{prompt.txt,response.json,meta.json}`.
/// Never on the request's critical path; callers log failures and move on.
pub fn save_exchange(
    root: &Path,
    id: Uuid,
    provider: &str,
    prompt: &str,
    raw_response: &str,
) -> anyhow::Result<PathBuf> {
    let dir = tx_dir(root, id);
    fs::create_dir_all(&dir)?;

    fs::write(dir.join("prompt.txt"), prompt)?;
    fs::write(dir.join("response.json"), raw_response)?;

    let meta = json!({
        "id": id,
        "provider": provider,
        "saved_at": Utc::now(),
    });
    fs::write(dir.join("meta.json"), serde_json::to_string_pretty(&meta)?)?;

    Ok(dir)
}

fn tx_dir(root: &Path, id: Uuid) -> PathBuf {
    root.join(".botforge").join("tx").join(id.to_string())
}
