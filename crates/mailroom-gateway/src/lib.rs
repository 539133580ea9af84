// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for Mailroom.
//!
//! Serves the email list, the edit form and form submission as server-side
//! rendered HTML over axum.

pub mod error;
pub mod handlers;
pub mod pages;
pub mod server;

pub use error::PageError;
pub use server::{router, start_server, AppState, ServerConfig};
