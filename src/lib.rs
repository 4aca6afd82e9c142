//! Transcript Archive Service Library
//!
//! This library crate defines the modules that make up the archiving service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three small subsystems:
//!
//! - **`ingestion`**: The intake endpoint. Parses the submitted JSON payload,
//!   validates the `transcript` field, and hands the value to storage.
//! - **`retrieval`**: The download endpoint. Resolves a stored file by name and
//!   serves it back with attachment headers.
//! - **`storage`**: The persistence layer. Owns the storage directory, generates
//!   unique filenames, and keeps every resolved path inside that directory.

pub mod ingestion;
pub mod retrieval;
pub mod storage;
