//! MongoDB Atlas API client subsystem.
//!
//! # Data Flow
//! ```text
//! AtlasConfig (base URL + digest credentials)
//!     → client.rs (build reqwest client, stamp user agent)
//!     → one digest-authenticated call per handler invocation
//!     → types.rs (decode project document or Atlas error document)
//! ```
//!
//! # Design Decisions
//! - A client is built fresh per request and discarded after one call;
//!   there is no pooling or caching across requests
//! - No retries, no backoff; each call is all-or-nothing
//! - Non-2xx responses are decoded against the Atlas error document so the
//!   upstream status and error code survive into the response

pub mod client;
pub mod types;

pub use client::AtlasClient;
pub use types::{AtlasError, AtlasProject, AtlasResult, ProjectRequest};
