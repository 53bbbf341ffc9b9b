//! The compactor: rewrite the full record set into fresh shards.
//!
//! Every mutation except append goes through here. Each new shard is written
//! to a `.tmp` sibling and renamed into place, so a crash mid-compaction
//! leaves either the old or the new contents of any given shard — never a
//! half-written file. Stale higher-numbered shards are unlinked last.

use std::path::Path;

use fete_core::Invitation;
use tokio::fs;

use crate::{Result, shard};

/// Rewrite all shards under `dir` with `records`, chunked to `capacity`
/// records per shard and preserving iteration order.
pub async fn rewrite_shards(
  dir: &Path,
  records: &[Invitation],
  capacity: usize,
) -> Result<()> {
  fs::create_dir_all(dir).await?;

  let mut new_count = 0u32;
  for (i, chunk) in records.chunks(capacity).enumerate() {
    let index = i as u32 + 1;
    let mut content = String::new();
    for invitation in chunk {
      content.push_str(&serde_json::to_string(invitation)?);
      content.push('\n');
    }

    let path = shard::shard_path(dir, index);
    let tmp = path.with_extension(format!("{}.tmp", shard::FILE_EXT));
    fs::write(&tmp, &content).await?;
    fs::rename(&tmp, &path).await?;
    new_count = index;
  }

  // Anything beyond the freshly written range is left over from before the
  // mutation (records shrank, or the whole set was deleted).
  for (index, path) in shard::list_shards(dir).await? {
    if index > new_count {
      fs::remove_file(&path).await?;
    }
  }

  tracing::debug!(records = records.len(), shards = new_count, "compacted");
  Ok(())
}
