//! # Stockpile Architecture
//!
//! Stockpile is a **UI-agnostic inventory library**: a small record store for
//! stock-keeping units, persisted as one JSON file. The `stockpile` binary is
//! one client of it; a GUI or a web service could be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, render.rs)                          │
//! │  - Parses arguments, formats currency, prompts, exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves names/UUIDs to ids                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, merge-on-add, spend, delete, lookups         │
//! │  - Returns `Result<CmdResult>`                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ItemStore: in-memory table, save after every mutation    │
//! │  - DataStore trait: FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - Item names are unique ignoring case and surrounding whitespace. Adding
//!   an existing name restocks it instead of creating a second item.
//! - `stock_value` is always `quantity * price`, recomputed on every change
//!   and on load.
//! - Quantities never go negative; prices set through the store are strictly
//!   positive.
//!
//! ## Failure Model
//!
//! Bad input and unknown items are typed errors ([`error::StockpileError`]).
//! Storage trouble is never fatal: an unreadable data file yields an empty
//! store, and a failed save keeps the in-memory change. Both surface as
//! [`error::StoreWarning`]s.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Item`, `ItemRecord`, `ItemMap`)
//! - [`config`]: Configuration management
//! - [`error`]: Error and warning types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
