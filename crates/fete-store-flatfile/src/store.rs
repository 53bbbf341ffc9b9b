//! [`FlatFileStore`] — the flat-file implementation of [`InvitationStore`].

use std::path::{Path, PathBuf};

use chrono::Utc;
use fete_core::{
  Invitation, InvitationPatch, NewInvitation, slug,
  store::InvitationStore,
};
use tokio::{fs, io::AsyncWriteExt as _, sync::Mutex};
use uuid::Uuid;

use crate::{Result, compact, shard};

/// Records per shard before the appender rotates to a new file.
pub const DEFAULT_SHARD_CAPACITY: usize = 1000;

// ─── Store ───────────────────────────────────────────────────────────────────

/// An invitation store backed by a directory of NDJSON shard files.
///
/// Lookups are unindexed linear scans over every shard; fine at guest-list
/// scale. The `write_lock` serialises every append and every read-modify-
/// rewrite sequence, so at most one mutation is in flight per store instance.
/// Two *processes* sharing a data directory are not protected — one logical
/// store per directory is the caller's responsibility.
pub struct FlatFileStore {
  dir:        PathBuf,
  capacity:   usize,
  write_lock: Mutex<()>,
}

impl FlatFileStore {
  /// Open (or create) a store rooted at `dir` with the default capacity.
  pub async fn open(dir: impl AsRef<Path>) -> Result<Self> {
    Self::open_with_capacity(dir, DEFAULT_SHARD_CAPACITY).await
  }

  /// Open (or create) a store with an explicit shard capacity — mostly
  /// useful for exercising rotation in tests.
  pub async fn open_with_capacity(
    dir: impl AsRef<Path>,
    capacity: usize,
  ) -> Result<Self> {
    let dir = dir.as_ref().to_path_buf();
    fs::create_dir_all(&dir).await?;
    Ok(Self { dir, capacity, write_lock: Mutex::new(()) })
  }

  /// Read every record from every shard, best-effort: unreadable files and
  /// corrupt lines are skipped, never fatal. Order is shard order then line
  /// order, i.e. creation order as long as compaction preserved it.
  async fn load_all(&self) -> Result<Vec<Invitation>> {
    let shards = match shard::list_shards(&self.dir).await {
      Ok(shards) => shards,
      Err(e) => {
        tracing::warn!(dir = %self.dir.display(), error = %e, "cannot list shards, treating store as empty");
        return Ok(Vec::new());
      }
    };

    let mut records = Vec::new();
    for (_, path) in shards {
      match fs::read_to_string(&path).await {
        Ok(content) => records.extend(shard::parse_records(&path, &content)),
        Err(e) => {
          tracing::warn!(shard = %path.display(), error = %e, "skipping unreadable shard");
        }
      }
    }
    Ok(records)
  }

  /// Append one serialised record to the active shard.
  async fn append(&self, invitation: &Invitation) -> Result<()> {
    let path = shard::active_shard(&self.dir, self.capacity).await?;
    let mut line = serde_json::to_string(invitation)?;
    line.push('\n');

    let mut file = fs::OpenOptions::new().append(true).open(&path).await?;
    file.write_all(line.as_bytes()).await?;
    Ok(())
  }
}

// ─── Trait implementation ────────────────────────────────────────────────────

impl InvitationStore for FlatFileStore {
  type Error = crate::Error;

  async fn create(&self, input: NewInvitation) -> Result<Invitation> {
    let invitation = Invitation {
      id:             Uuid::new_v4(),
      slug:           slug::generate(&input.recipient_name),
      recipient_name: input.recipient_name,
      language:       input.language,
      is_read:        false,
      created_at:     Utc::now(),
    };

    let _guard = self.write_lock.lock().await;
    self.append(&invitation).await?;

    tracing::debug!(id = %invitation.id, slug = %invitation.slug, "created invitation");
    Ok(invitation)
  }

  async fn get_all(&self) -> Result<Vec<Invitation>> {
    self.load_all().await
  }

  async fn get_by_slug(&self, slug: &str) -> Result<Option<Invitation>> {
    let records = self.load_all().await?;
    Ok(records.into_iter().find(|inv| inv.slug == slug))
  }

  async fn get_by_id(&self, id: Uuid) -> Result<Option<Invitation>> {
    let records = self.load_all().await?;
    Ok(records.into_iter().find(|inv| inv.id == id))
  }

  async fn update(
    &self,
    id: Uuid,
    patch: InvitationPatch,
  ) -> Result<Option<Invitation>> {
    let _guard = self.write_lock.lock().await;

    let mut records = self.load_all().await?;
    let Some(target) = records.iter_mut().find(|inv| inv.id == id) else {
      return Ok(None);
    };
    patch.apply(target);
    let updated = target.clone();

    compact::rewrite_shards(&self.dir, &records, self.capacity).await?;
    Ok(Some(updated))
  }

  async fn mark_as_read(&self, slug: &str) -> Result<bool> {
    // Inlined rather than delegating to `update` so the whole
    // lookup-modify-rewrite runs under one lock acquisition.
    let _guard = self.write_lock.lock().await;

    let mut records = self.load_all().await?;
    let Some(target) = records.iter_mut().find(|inv| inv.slug == slug) else {
      return Ok(false);
    };
    InvitationPatch::read().apply(target);

    compact::rewrite_shards(&self.dir, &records, self.capacity).await?;
    Ok(true)
  }

  async fn delete(&self, id: Uuid) -> Result<bool> {
    let _guard = self.write_lock.lock().await;

    let records = self.load_all().await?;
    let before = records.len();
    let remaining: Vec<Invitation> =
      records.into_iter().filter(|inv| inv.id != id).collect();

    if remaining.len() == before {
      return Ok(false);
    }

    compact::rewrite_shards(&self.dir, &remaining, self.capacity).await?;
    tracing::debug!(%id, "deleted invitation");
    Ok(true)
  }
}
