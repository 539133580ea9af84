// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Mailroom.
//!
//! - [`MockStore`] - in-memory `EmailStore` that records queries and updates
//! - [`TestDatabase`] - seeded SQLite file in a temp directory

pub mod fixtures;
pub mod mock_store;

pub use fixtures::TestDatabase;
pub use mock_store::MockStore;
