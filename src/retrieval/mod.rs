//! Retrieval Service Module
//!
//! Serves previously archived transcripts back to clients as file downloads.
//!
//! ## Behavior
//! - The requested name is resolved by the store, which refuses anything that
//!   would escape the storage directory.
//! - Successful responses carry the full file bytes with a JSON content type
//!   and an attachment disposition so browsers save rather than render.
//! - Every failure (missing file, refused name, read error) is reported as 404.

pub mod handlers;
pub mod types;
