//! Integration tests for `FlatFileStore` against a temporary directory.

use std::collections::HashSet;

use fete_core::{InvitationPatch, Language, NewInvitation, store::InvitationStore};
use tempfile::TempDir;
use tokio::fs;
use uuid::Uuid;

use crate::FlatFileStore;

async fn store(dir: &TempDir) -> FlatFileStore {
  FlatFileStore::open(dir.path()).await.expect("open store")
}

async fn store_with_capacity(dir: &TempDir, capacity: usize) -> FlatFileStore {
  FlatFileStore::open_with_capacity(dir.path(), capacity)
    .await
    .expect("open store")
}

fn guest(name: &str) -> NewInvitation {
  NewInvitation { recipient_name: name.into(), language: Language::Pl }
}

// ─── Create & lookup ─────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_get_by_slug() {
  let dir = tempfile::tempdir().unwrap();
  let s = store(&dir).await;

  let created = s.create(guest("Anna Kowalska")).await.unwrap();
  assert!(created.slug.starts_with("anna-kowalska-"));
  assert!(!created.is_read);

  let fetched = s.get_by_slug(&created.slug).await.unwrap();
  assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn create_then_get_by_id() {
  let dir = tempfile::tempdir().unwrap();
  let s = store(&dir).await;

  let created = s.create(guest("Piotr Nowak")).await.unwrap();
  let fetched = s.get_by_id(created.id).await.unwrap();
  assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn lookup_misses_return_none() {
  let dir = tempfile::tempdir().unwrap();
  let s = store(&dir).await;
  s.create(guest("Anna")).await.unwrap();

  assert_eq!(s.get_by_slug("no-such-slug").await.unwrap(), None);
  assert_eq!(s.get_by_id(Uuid::new_v4()).await.unwrap(), None);
}

#[tokio::test]
async fn get_all_preserves_creation_order() {
  let dir = tempfile::tempdir().unwrap();
  let s = store(&dir).await;

  let names = ["Ala", "Basia", "Celina", "Dorota"];
  for name in names {
    s.create(guest(name)).await.unwrap();
  }

  let all = s.get_all().await.unwrap();
  let got: Vec<&str> =
    all.iter().map(|inv| inv.recipient_name.as_str()).collect();
  assert_eq!(got, names);
}

#[tokio::test]
async fn empty_store_reads_empty() {
  let dir = tempfile::tempdir().unwrap();
  let s = store(&dir).await;
  assert!(s.get_all().await.unwrap().is_empty());
}

// ─── mark_as_read ────────────────────────────────────────────────────────────

#[tokio::test]
async fn mark_as_read_flips_flag() {
  let dir = tempfile::tempdir().unwrap();
  let s = store(&dir).await;

  let created = s.create(guest("Ewa")).await.unwrap();
  assert!(s.mark_as_read(&created.slug).await.unwrap());

  let fetched = s.get_by_slug(&created.slug).await.unwrap().unwrap();
  assert!(fetched.is_read);
}

#[tokio::test]
async fn mark_as_read_is_idempotent() {
  let dir = tempfile::tempdir().unwrap();
  let s = store(&dir).await;

  let created = s.create(guest("Ewa")).await.unwrap();
  assert!(s.mark_as_read(&created.slug).await.unwrap());
  let after_first = s.get_all().await.unwrap();

  assert!(s.mark_as_read(&created.slug).await.unwrap());
  let after_second = s.get_all().await.unwrap();
  assert_eq!(after_first, after_second);
}

#[tokio::test]
async fn mark_as_read_missing_slug_is_false() {
  let dir = tempfile::tempdir().unwrap();
  let s = store(&dir).await;
  assert!(!s.mark_as_read("nobody-here").await.unwrap());
}

// ─── update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_merges_fields() {
  let dir = tempfile::tempdir().unwrap();
  let s = store(&dir).await;

  let created = s.create(guest("Jan")).await.unwrap();
  let patch = InvitationPatch {
    recipient_name: Some("Jan Kowalski".into()),
    language: Some(Language::En),
    is_read: None,
  };
  let updated = s.update(created.id, patch).await.unwrap().unwrap();

  assert_eq!(updated.recipient_name, "Jan Kowalski");
  assert_eq!(updated.language, Language::En);
  // Untouched fields survive the rewrite.
  assert_eq!(updated.id, created.id);
  assert_eq!(updated.slug, created.slug);
  assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn update_missing_id_returns_none() {
  let dir = tempfile::tempdir().unwrap();
  let s = store(&dir).await;
  s.create(guest("Jan")).await.unwrap();

  let result = s.update(Uuid::new_v4(), InvitationPatch::read()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn empty_patch_compaction_round_trips() {
  let dir = tempfile::tempdir().unwrap();
  let s = store_with_capacity(&dir, 2).await;

  for name in ["A", "B", "C", "D", "E"] {
    s.create(guest(name)).await.unwrap();
  }
  let before = s.get_all().await.unwrap();

  let target = before[2].id;
  s.update(target, InvitationPatch::default()).await.unwrap().unwrap();

  let after = s.get_all().await.unwrap();
  let before_set: HashSet<_> = before.iter().map(|i| i.id).collect();
  let after_set: HashSet<_> = after.iter().map(|i| i.id).collect();
  assert_eq!(before_set, after_set);
  assert_eq!(before, after); // order preserved too
}

// ─── delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_record() {
  let dir = tempfile::tempdir().unwrap();
  let s = store(&dir).await;

  let a = s.create(guest("A")).await.unwrap();
  let b = s.create(guest("B")).await.unwrap();

  assert!(s.delete(a.id).await.unwrap());
  let all = s.get_all().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id, b.id);
}

#[tokio::test]
async fn delete_missing_id_is_false_and_leaves_count() {
  let dir = tempfile::tempdir().unwrap();
  let s = store(&dir).await;

  s.create(guest("A")).await.unwrap();
  s.create(guest("B")).await.unwrap();

  assert!(!s.delete(Uuid::new_v4()).await.unwrap());
  assert_eq!(s.get_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn delete_last_record_empties_store() {
  let dir = tempfile::tempdir().unwrap();
  let s = store(&dir).await;

  let a = s.create(guest("A")).await.unwrap();
  assert!(s.delete(a.id).await.unwrap());
  assert!(s.get_all().await.unwrap().is_empty());
}

// ─── Sharding ────────────────────────────────────────────────────────────────

async fn shard_line_counts(dir: &TempDir) -> Vec<usize> {
  let mut counts = Vec::new();
  let mut index = 1u32;
  loop {
    let path = dir.path().join(format!("invitations_{index}.txt"));
    let Ok(content) = fs::read_to_string(&path).await else { break };
    counts.push(content.lines().filter(|l| !l.trim().is_empty()).count());
    index += 1;
  }
  counts
}

#[tokio::test]
async fn appends_rotate_at_capacity() {
  let dir = tempfile::tempdir().unwrap();
  let capacity = 3;
  let s = store_with_capacity(&dir, capacity).await;

  // N*capacity + 1 records => N+1 shards, the first N full.
  for i in 0..(2 * capacity + 1) {
    s.create(guest(&format!("Guest {i}"))).await.unwrap();
  }

  assert_eq!(shard_line_counts(&dir).await, vec![3, 3, 1]);

  let all = s.get_all().await.unwrap();
  assert_eq!(all.len(), 2 * capacity + 1);
  let names: Vec<String> =
    all.iter().map(|inv| inv.recipient_name.clone()).collect();
  let expected: Vec<String> =
    (0..(2 * capacity + 1)).map(|i| format!("Guest {i}")).collect();
  assert_eq!(names, expected);
}

#[tokio::test]
async fn compaction_renumbers_and_drops_stale_shards() {
  let dir = tempfile::tempdir().unwrap();
  let s = store_with_capacity(&dir, 2).await;

  let mut ids = Vec::new();
  for i in 0..6 {
    ids.push(s.create(guest(&format!("G{i}"))).await.unwrap().id);
  }
  assert_eq!(shard_line_counts(&dir).await, vec![2, 2, 2]);

  // Dropping two records shrinks the set to two shards; the old third
  // shard must not linger.
  assert!(s.delete(ids[0]).await.unwrap());
  assert!(s.delete(ids[1]).await.unwrap());
  assert_eq!(shard_line_counts(&dir).await, vec![2, 2]);
  assert_eq!(s.get_all().await.unwrap().len(), 4);
}

// ─── Corruption tolerance ────────────────────────────────────────────────────

#[tokio::test]
async fn corrupt_lines_are_skipped() {
  let dir = tempfile::tempdir().unwrap();
  let s = store(&dir).await;

  let a = s.create(guest("A")).await.unwrap();
  let b = s.create(guest("B")).await.unwrap();

  // Wedge garbage between the two good records.
  let path = dir.path().join("invitations_1.txt");
  let content = fs::read_to_string(&path).await.unwrap();
  let mut lines: Vec<&str> = content.lines().collect();
  lines.insert(1, "{ not json");
  lines.insert(2, "");
  fs::write(&path, lines.join("\n")).await.unwrap();

  let all = s.get_all().await.unwrap();
  let ids: Vec<Uuid> = all.iter().map(|inv| inv.id).collect();
  assert_eq!(ids, vec![a.id, b.id]);
}

#[tokio::test]
async fn unreadable_shard_does_not_poison_the_rest() {
  let dir = tempfile::tempdir().unwrap();
  let s = store_with_capacity(&dir, 1).await;

  let a = s.create(guest("A")).await.unwrap();
  s.create(guest("B")).await.unwrap();

  // A directory squatting on a shard name makes that shard unreadable.
  fs::remove_file(dir.path().join("invitations_2.txt")).await.unwrap();
  fs::create_dir(dir.path().join("invitations_2.txt")).await.unwrap();

  let all = s.get_all().await.unwrap();
  let ids: Vec<Uuid> = all.iter().map(|inv| inv.id).collect();
  assert_eq!(ids, vec![a.id]);
}

// ─── Persistence across instances ────────────────────────────────────────────

#[tokio::test]
async fn records_survive_reopen() {
  let dir = tempfile::tempdir().unwrap();

  let created = {
    let s = store(&dir).await;
    s.create(guest("Persistent Guest")).await.unwrap()
  };

  let s = store(&dir).await;
  let fetched = s.get_by_slug(&created.slug).await.unwrap();
  assert_eq!(fetched, Some(created));
}
