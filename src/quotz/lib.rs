//! # Quotz Architecture
//!
//! Quotz is a **UI-agnostic quote-keeping library**. The CLI binary is one
//! client of it, not the reason it exists, and that distinction drives the
//! layering below.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs)                              │
//! │  - Parses arguments, formats output, runs the watch loop    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the book and the loaded config                      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions beyond what the book provides         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Book + Storage (book.rs, store/)                           │
//! │  - QuoteBook: loaded quotes, saved filter, write-through    │
//! │  - Abstract StateStore trait                                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sync engine (`sync/`) sits beside the command layer: the feed client
//! fetches and maps the remote payload, the merge module folds it into the
//! book, and the schedule decides when the watch loop fires. Commands drive
//! it; it never touches the terminal itself.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, book, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a TUI, a web endpoint, or any other
//! client.
//!
//! ## Testing Strategy
//!
//! 1. **Commands and the book**: thorough unit tests of business logic over
//!    `InMemoryStore`. This is where the lion's share of testing lives.
//! 2. **Sync**: the merge and schedule modules are pure and tested as such;
//!    the feed client is tested against local payloads.
//! 3. **CLI**: integration tests run the built binary against a temp data
//!    directory (see `tests/`).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`book`]: The in-memory quote collection and its persistence rules
//! - [`sync`]: Feed client, merge semantics, and the sync schedule
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Quote`, `CategoryFilter`)
//! - [`config`]: Configuration management
//! - [`paths`]: Data directory resolution
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod paths;
pub mod store;
pub mod sync;
