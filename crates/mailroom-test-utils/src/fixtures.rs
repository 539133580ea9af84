// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! On-disk SQLite fixtures.

use std::path::{Path, PathBuf};

use rusqlite::params;
use tempfile::TempDir;

/// DDL of the seeded `emails` table.
pub const EMAILS_DDL: &str = "CREATE TABLE emails (
    id INTEGER PRIMARY KEY,
    name VARCHAR(191) NOT NULL,
    subject VARCHAR(255),
    body TEXT,
    content LONGTEXT,
    hits INT NOT NULL DEFAULT 0,
    created_at DATETIME
);";

/// A temp directory holding `campaigns.db` with a seeded `emails` table.
///
/// Rows:
/// - 1: `Welcome` / `Welcome aboard` with content `{"headline":"Hi","cta":"Go"}`
/// - 2: `Follow-up` with NULL body and no content
pub struct TestDatabase {
    dir: TempDir,
    path: PathBuf,
}

impl TestDatabase {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("campaigns.db");
        let conn = rusqlite::Connection::open(&path).expect("create database");
        conn.execute_batch(EMAILS_DDL).expect("create emails table");
        conn.execute(
            "INSERT INTO emails (id, name, subject, body, content, hits) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                1,
                "Welcome",
                "Welcome aboard",
                "<p>Hello there</p>",
                r#"{"headline":"Hi","cta":"Go"}"#,
                12
            ],
        )
        .expect("seed row 1");
        conn.execute(
            "INSERT INTO emails (id, name, subject, body, content, hits) VALUES (?1, ?2, ?3, NULL, NULL, 0)",
            params![2, "Follow-up", "Still there?"],
        )
        .expect("seed row 2");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Delete a row straight from the file, bypassing the store.
    pub fn delete(&self, id: i64) {
        let conn = rusqlite::Connection::open(&self.path).expect("open database");
        conn.execute("DELETE FROM emails WHERE id = ?1", params![id])
            .expect("delete row");
    }

    /// Read one column straight from the file, bypassing the store.
    pub fn read(&self, id: i64, column: &str) -> Option<String> {
        let conn = rusqlite::Connection::open(&self.path).expect("open database");
        conn.query_row(
            &format!("SELECT {column} FROM emails WHERE id = ?1"),
            params![id],
            |row| row.get(0),
        )
        .expect("read column")
    }
}
