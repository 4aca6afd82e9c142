//! Ingestion Service Module
//!
//! Handles the intake and archiving of weekly transcript payloads.
//!
//! ## Workflow
//! 1. **Parse**: Reads the raw request body and parses it as JSON, regardless of
//!    the declared content type.
//! 2. **Validate**: Requires a truthy `transcript` field in the parsed object.
//! 3. **Storage**: Writes the transcript value into the storage directory under
//!    a generated unique filename.
//! 4. **Response**: Returns the `/download/...` URL for the stored file.

pub mod handlers;
pub mod types;
