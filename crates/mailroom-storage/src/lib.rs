// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite backend for the Mailroom email table.
//!
//! One `tokio-rusqlite` connection serializes every statement. Queries are
//! plain functions over [`Database`]; [`SqliteStore`] exposes them through
//! the [`mailroom_core::EmailStore`] trait.

pub mod adapter;
pub mod database;
pub mod queries;

pub use adapter::SqliteStore;
pub use database::Database;
