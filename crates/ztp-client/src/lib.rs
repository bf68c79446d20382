//! # ztp-client - ZTP Service Client
//!
//! Async HTTP access to the ZTP configuration service: profile data, served
//! files, CSV import/export and the provisioning log.
//!
//! Depends on [`ztp_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`ZtpClient`] - One method per service endpoint
//! - [`UploadProgress`] - Byte counts reported while an upload streams
//!
//! ## Errors
//!
//! Failures map onto [`ztp_core::Error`]:
//! - `Server` for a 500 carrying a JSON message
//! - `Status` for any other non-2xx response
//! - `Transport` when no response arrived
//! - `Json` for malformed bodies
//! - `Cancelled` for aborted uploads

pub mod client;
mod response;
pub mod upload;

pub use client::{ZtpClient, EXPORT_FILE_NAME};
pub use upload::UploadProgress;
