//! # Propmaster Architecture
//!
//! Propmaster is a **UI-agnostic property-listing catalog**. The admin page
//! (or any other client) is a thin shell over this library: it collects a
//! record-shaped payload, calls the facade, and renders whatever comes back.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  Presentation layer (DOM, CLI, web — NOT in this crate)    │
//! │  - Renders lists/stats, captures forms, downloads files   │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - PropertyApi: owns the store and the selection           │
//! │  - Guards the selection/store consistency invariant        │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - Business logic; returns CmdResult with leveled messages │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Core (store, filter, selection, stats, csv, model)        │
//! │  - Synchronous, single-threaded, in-memory                 │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments and returns plain
//! Rust types (`Result<CmdResult>`). Nothing writes to stdout, spawns a task,
//! or assumes a terminal or a browser. The simulated save delays and upload
//! progress bars of the original admin page are presentation theater and do
//! not exist here; every operation commits immediately.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each user-facing flow
//! - [`store`]: The canonical record collection
//! - [`filter`]: Search/status/type criteria over the collection
//! - [`selection`]: Id set for bulk actions
//! - [`stats`]: Per-status summary counters
//! - [`csv`]: Column projections and CSV serialization
//! - [`model`]: Core data types ([`model::Property`], [`model::Status`])
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod csv;
pub mod error;
pub mod filter;
pub mod model;
pub mod selection;
pub mod stats;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
