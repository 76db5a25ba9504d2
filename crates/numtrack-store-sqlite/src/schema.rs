//! SQL schema for the numtrack SQLite store.
//!
//! Executed once at connection startup. The schema version is stamped in
//! `PRAGMA user_version`; future migrations will be gated on it.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS phone_records (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    phone_number  TEXT NOT NULL UNIQUE,   -- E.164, e.g. '+2348012345678'
    carrier       TEXT,
    region        TEXT,                   -- ISO 3166 alpha-2
    timezones     TEXT NOT NULL DEFAULT '[]',  -- JSON array of IANA names
    is_valid      INTEGER NOT NULL,
    phone_type    TEXT NOT NULL DEFAULT 'Unknown',
    date_added    TEXT NOT NULL,          -- fixed-width RFC 3339 UTC
    last_tracked  TEXT NOT NULL,
    notes         TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS phone_records_added_idx ON phone_records(date_added);

PRAGMA user_version = 1;
";

/// Column list shared by every `SELECT`; order matches
/// [`RawRecord::from_row`](crate::encode::RawRecord::from_row).
pub const RECORD_COLUMNS: &str = "phone_number, carrier, region, timezones, is_valid,
   phone_type, date_added, last_tracked, notes";

/// Newest first; the rowid breaks ties between records added in the same
/// microsecond.
pub const NEWEST_FIRST: &str = "ORDER BY date_added DESC, id DESC";
