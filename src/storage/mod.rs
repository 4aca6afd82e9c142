//! Transcript Storage Module
//!
//! Owns the single process-wide storage directory and every interaction with it.
//!
//! ## Core Concepts
//! - **Initialization**: The directory is created once at startup if absent; repeated startups are idempotent.
//! - **Naming**: Each transcript is persisted under `transcript_{UTC stamp}_{hex8}.json`. Generation
//!   checks for an existing file and regenerates the random suffix on collision (bounded retries)
//!   rather than silently overwriting.
//! - **Resolution**: Requested names are validated to resolve strictly inside the storage
//!   directory before any filesystem access.

pub mod store;
