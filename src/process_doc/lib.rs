//! # process_doc
//!
//! Produces a per-user PDF analysis report from an uploaded document. A PDF
//! input is copied verbatim; any other input gets a placeholder PDF. The
//! report lands in `public/output_<id>/analysis_report.pdf`, where `<id>` is
//! the user folder (`input_<id>`) with its prefix removed.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs + args.rs)                                    │
//! │  - Parses arguments, initialises logging, prints, exits     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns store + config, dispatches to commands              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/process.rs)                        │
//! │  - Derives the user id, lays out the output, copies/writes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ReportStore trait: FileStore, InMemoryStore (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the CLI writes to stdout/stderr or calls `std::process::exit`;
//! everything from [`api`] inward returns `Result`.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade, entry point for clients
//! - [`commands`]: The report operation and its result types
//! - [`store`]: Filesystem abstraction and implementations
//! - [`model`]: User id derivation, report kinds, request/outcome types
//! - [`config`]: Output layout configuration
//! - [`placeholder`]: Bytes of the placeholder PDF
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod placeholder;
pub mod store;
