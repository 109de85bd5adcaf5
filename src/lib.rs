//! MailBot backend: generates three Korean business-email reply drafts
//! (짧은/보통/상세) for a pasted email by delegating to an LLM provider.
//!
//! The crate has two surfaces: the axum HTTP service under `controllers` /
//! `domain` / `infrastructure`, and the headless reference client under
//! [`client`] (daily quota tracking, presenter state, copy-to-clipboard)
//! meant to be embedded by whatever shell renders the page.

pub mod client;
pub mod controllers;
pub mod domain;
pub mod error;
pub mod infrastructure;
