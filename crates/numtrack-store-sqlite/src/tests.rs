//! Integration tests for `SqliteStore` against an in-memory database.

use numtrack_core::{
  record::{NewRecord, PhoneType},
  store::RecordStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn record(number: &str) -> NewRecord {
  NewRecord {
    phone_number: number.into(),
    carrier:      Some("MTN".into()),
    region:       Some("NG".into()),
    timezones:    vec!["Africa/Lagos".into()],
    is_valid:     true,
    phone_type:   PhoneType::Mobile,
    notes:        String::new(),
  }
}

// ─── Upsert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn upsert_and_get() {
  let s = store().await;

  let stored = s.upsert(record("+2348031234567")).await.unwrap();
  assert_eq!(stored.phone_number, "+2348031234567");
  assert_eq!(stored.date_added, stored.last_tracked);

  let fetched = s.get("+2348031234567").await.unwrap().unwrap();
  assert_eq!(fetched, stored);
  assert_eq!(fetched.timezones, vec!["Africa/Lagos".to_string()]);
  assert_eq!(fetched.phone_type, PhoneType::Mobile);
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get("+15550000000").await.unwrap().is_none());
}

#[tokio::test]
async fn upsert_overwrites_but_keeps_date_added() {
  let s = store().await;

  let first = s.upsert(record("+2348031234567")).await.unwrap();
  tokio::time::sleep(std::time::Duration::from_millis(5)).await;

  let mut again = record("+2348031234567");
  again.notes = "second pass".into();
  again.carrier = None;
  let second = s.upsert(again).await.unwrap();

  assert_eq!(second.date_added, first.date_added);
  assert!(second.last_tracked > first.last_tracked);
  assert_eq!(second.notes, "second pass");
  assert_eq!(second.carrier, None);
  assert_eq!(s.count().await.unwrap(), 1);
}

// ─── Listing and search ──────────────────────────────────────────────────────

#[tokio::test]
async fn list_all_is_newest_first() {
  let s = store().await;
  for n in ["+2348031111111", "+2348032222222", "+2348033333333"] {
    s.upsert(record(n)).await.unwrap();
  }

  let all = s.list_all().await.unwrap();
  let numbers: Vec<_> = all.iter().map(|r| r.phone_number.as_str()).collect();
  assert_eq!(numbers, ["+2348033333333", "+2348032222222", "+2348031111111"]);
}

#[tokio::test]
async fn search_matches_each_text_column() {
  let s = store().await;

  let mut a = record("+2348031111111");
  a.notes = "Office line".into();
  s.upsert(a).await.unwrap();

  let mut b = record("+447911123456");
  b.carrier = Some("Vodafone".into());
  b.region = Some("GB".into());
  s.upsert(b).await.unwrap();

  assert_eq!(s.search("office").await.unwrap().len(), 1);
  assert_eq!(s.search("VODA").await.unwrap().len(), 1);
  assert_eq!(s.search("gb").await.unwrap().len(), 1);
  assert_eq!(s.search("79111").await.unwrap().len(), 1);
  assert_eq!(s.search("+").await.unwrap().len(), 2);
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
  let s = store().await;

  let mut a = record("+2348031111111");
  a.notes = "100% reliable".into();
  s.upsert(a).await.unwrap();
  s.upsert(record("+2348032222222")).await.unwrap();

  let hits = s.search("%").await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].phone_number, "+2348031111111");
  assert!(s.search("_").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_folds_ascii_case_only() {
  let s = store().await;

  let mut a = record("+2348031111111");
  a.notes = "Équipe Zürich".into();
  s.upsert(a).await.unwrap();

  assert_eq!(s.search("zürich").await.unwrap().len(), 1);
  assert_eq!(s.search("ZüRICH").await.unwrap().len(), 1);
  assert_eq!(s.search("Équipe").await.unwrap().len(), 1);
  assert!(s.search("équipe").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_with_no_match_is_empty() {
  let s = store().await;
  s.upsert(record("+2348031111111")).await.unwrap();
  assert!(s.search("nothing like this").await.unwrap().is_empty());
}

// ─── Deletion ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
  let s = store().await;
  s.upsert(record("+2348031111111")).await.unwrap();
  s.upsert(record("+2348032222222")).await.unwrap();

  assert!(s.delete("+2348031111111").await.unwrap());
  assert!(!s.delete("+2348031111111").await.unwrap());
  assert_eq!(s.count().await.unwrap(), 1);
}

#[tokio::test]
async fn clear_returns_removed_count() {
  let s = store().await;
  for n in ["+2348031111111", "+2348032222222", "+2348033333333"] {
    s.upsert(record(n)).await.unwrap();
  }

  assert_eq!(s.clear().await.unwrap(), 3);
  assert_eq!(s.count().await.unwrap(), 0);
  assert_eq!(s.clear().await.unwrap(), 0);
}

// ─── Backup ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn backup_writes_a_readable_snapshot() {
  let s = store().await;
  s.upsert(record("+2348031111111")).await.unwrap();

  let dir = tempfile::tempdir().unwrap();
  let dest = dir.path().join("snapshot.db");
  s.backup_to(&dest).await.unwrap();
  assert!(dest.exists());

  let restored = SqliteStore::open(&dest).await.unwrap();
  assert_eq!(restored.count().await.unwrap(), 1);
  assert!(restored.get("+2348031111111").await.unwrap().is_some());
}

#[tokio::test]
async fn backup_refuses_existing_destination() {
  let s = store().await;
  let dir = tempfile::tempdir().unwrap();
  let dest = dir.path().join("taken.db");
  std::fs::write(&dest, b"occupied").unwrap();

  assert!(s.backup_to(&dest).await.is_err());
}
