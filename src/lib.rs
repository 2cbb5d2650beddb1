//! # Neatly
//!
//! Neatly is a small library of **independent formatting and normalization
//! helpers**. It is not a CLI application that happens to have some library
//! code: it's a library that happens to ship a demo CLI client.
//!
//! ## The Three Helper Groups
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  logging                                                    │
//! │  - Named, leveled channels with console + file sinks        │
//! │  - Explicit ChannelRegistry, no hidden global state         │
//! └─────────────────────────────────────────────────────────────┘
//! ┌─────────────────────────────────────────────────────────────┐
//! │  text                                                       │
//! │  - Bounded truncation with suffix, character-unit safe      │
//! │  - Idempotent kebab-case conversion                         │
//! └─────────────────────────────────────────────────────────────┘
//! ┌─────────────────────────────────────────────────────────────┐
//! │  numeric                                                    │
//! │  - Exact-decimal division at a fixed scale                  │
//! │  - Percentage with display rounding                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The groups share no state and never call each other; each is a leaf.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Library code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>`)
//! - **Never** writes to stdout (the console log sink targets stderr, and
//!   only when a caller configured one)
//! - **Never** calls `std::process::exit`
//! - **Never** logs internally; errors are returned to the caller, who
//!   decides what to do with them
//!
//! The same core can back a CLI, a service, or any other host.
//!
//! ## Testing Strategy
//!
//! 1. **Helpers** (`text`, `numeric`, `logging`): unit tests alongside the
//!    code; logging tests capture output with [`logging::MemorySink`]
//!    instead of touching a terminal.
//! 2. **File sinks**: integration tests under `tests/` against temp dirs.
//! 3. **Demo CLI** (`main.rs` + `args.rs`): binary-level tests asserting
//!    rendered output.
//!
//! ## Module Overview
//!
//! - [`logging`]: channel registry, severity levels, sinks
//! - [`text`]: truncation and kebab-case conversion
//! - [`numeric`]: precision division and percentages
//! - [`error`]: error types

pub mod error;
pub mod logging;
pub mod numeric;
pub mod text;

pub use error::{NeatlyError, Result};
pub use logging::{Channel, ChannelRegistry, Severity};
