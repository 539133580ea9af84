// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQL for the email table.

pub mod emails;
pub mod schema;
