//! Shard file naming, listing, and the append-side rotation policy.
//!
//! A shard is `invitations_<N>.txt`, N contiguous from 1. The active shard
//! is always the highest-numbered one; it stops accepting appends once it
//! holds `capacity` records.

use std::path::{Path, PathBuf};

use fete_core::Invitation;
use tokio::fs;

pub const FILE_PREFIX: &str = "invitations";
pub const FILE_EXT: &str = "txt";

/// Path of the shard with the given index.
pub fn shard_path(dir: &Path, index: u32) -> PathBuf {
  dir.join(format!("{FILE_PREFIX}_{index}.{FILE_EXT}"))
}

/// Parse the shard index out of a file name like `invitations_12.txt`.
/// Returns `None` for anything that is not a shard file.
pub fn parse_index(file_name: &str) -> Option<u32> {
  file_name
    .strip_prefix(FILE_PREFIX)?
    .strip_prefix('_')?
    .strip_suffix(&format!(".{FILE_EXT}"))?
    .parse()
    .ok()
}

/// List shard files in ascending index order. The sort is numeric on the
/// parsed index, not lexicographic — `invitations_10.txt` comes after
/// `invitations_9.txt`. A missing data directory is the empty store.
pub async fn list_shards(dir: &Path) -> std::io::Result<Vec<(u32, PathBuf)>> {
  let mut entries = match fs::read_dir(dir).await {
    Ok(entries) => entries,
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
    Err(e) => return Err(e),
  };

  let mut shards = Vec::new();
  while let Some(entry) = entries.next_entry().await? {
    let name = entry.file_name();
    if let Some(index) = name.to_str().and_then(parse_index) {
      shards.push((index, entry.path()));
    }
  }
  shards.sort_by_key(|(index, _)| *index);
  Ok(shards)
}

/// Count the records (non-blank lines) in one shard file.
pub async fn count_records(path: &Path) -> std::io::Result<usize> {
  let content = fs::read_to_string(path).await?;
  Ok(content.lines().filter(|line| !line.trim().is_empty()).count())
}

/// Return the shard that should receive the next append, creating a fresh
/// one if there is none yet or the current one is at capacity.
pub async fn active_shard(
  dir: &Path,
  capacity: usize,
) -> std::io::Result<PathBuf> {
  fs::create_dir_all(dir).await?;

  let shards = list_shards(dir).await?;
  let Some((last_index, last_path)) = shards.last() else {
    let first = shard_path(dir, 1);
    fs::write(&first, "").await?;
    return Ok(first);
  };

  if count_records(last_path).await? >= capacity {
    let next = shard_path(dir, last_index + 1);
    tracing::debug!(shard = %next.display(), "rotating to new shard");
    fs::write(&next, "").await?;
    return Ok(next);
  }

  Ok(last_path.clone())
}

/// Parse one shard file into records, best-effort: malformed lines are
/// skipped with a warning, never fatal.
pub fn parse_records(path: &Path, content: &str) -> Vec<Invitation> {
  let mut records = Vec::new();
  for line in content.lines().filter(|line| !line.trim().is_empty()) {
    match serde_json::from_str(line) {
      Ok(invitation) => records.push(invitation),
      Err(e) => {
        tracing::warn!(shard = %path.display(), error = %e, "skipping corrupt record");
      }
    }
  }
  records
}
