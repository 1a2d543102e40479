//! Shared types for the carrierd daemon.
//!
//! This crate contains:
//! - **Carrier models** — subscription metadata and published status snapshots
//! - **Icon table** — first-letter carrier-name to status-icon mapping
//! - **Notification model** — channel and notification shapes for the sink
//! - **Strings** — localized display text (English and Japanese built-ins)
//! - **Config** — service configuration with TOML-friendly defaults
//! - **Errors** — the lookup and publish failure taxonomy

pub mod config;
pub mod error;
pub mod icon;
pub mod models;
pub mod notification;
pub mod strings;
