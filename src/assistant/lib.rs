//! # Assistant Architecture
//!
//! The assistant is a contact book with a command prompt in front of it, plus
//! a file organizer that sorts a messy folder into category folders. The
//! library does the work; the two binaries (`assistant` and `clean-folder`)
//! only read input and print results.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs and bin/clean_folder.rs) │
//! │  - Reads lines, dispatches commands, prints results         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the loaded AddressBook and its store                │
//! │  - Persists the book after every mutating command           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over AddressBook, returns CmdResult       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (fields.rs, model.rs, book.rs) and Storage (store/)  │
//! │  - Validated field values, Record, AddressBook              │
//! │  - BookStore trait: FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The organizer (`organizer/`) sits beside the command layer: the `clean`
//! command and the `clean-folder` binary both call [`organizer::organize`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. Everything the user sees travels as
//! [`commands::CmdMessage`]s and listed records inside a [`commands::CmdResult`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`fields`]: Validated values (`Name`, `Phone`, `Email`, `Birthday`, `Note`...)
//! - [`model`]: `Record`, one contact
//! - [`book`]: `AddressBook`, the name-keyed collection of records
//! - [`store`]: Storage abstraction and implementations
//! - [`organizer`]: The folder sorter
//! - [`config`]: Configuration and home directory resolution
//! - [`logging`]: Log file setup
//! - [`cli`]: The REPL, command table and terminal printing
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod logging;
pub mod model;
pub mod organizer;
pub mod store;
