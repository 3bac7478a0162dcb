//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → env.rs (read & parse named variables)
//!     → Settings (immutable)
//!     → shared via Arc to the dispatcher and client factory
//! ```
//!
//! # Design Decisions
//! - Settings are immutable once constructed at startup
//! - All fields have defaults so an empty environment still boots
//! - Missing credentials are not an error here; they surface later as an
//!   authentication failure from the Atlas API

pub mod env;
pub mod schema;

pub use schema::AtlasConfig;
pub use schema::ListenerConfig;
pub use schema::Settings;
pub use schema::TimeoutConfig;
