//! MongoDB Atlas Project Provider
//!
//! An HTTP-triggered function that proxies project CRUD (create, read,
//! delete) onto the MongoDB Atlas administration API, authenticating with
//! digest credentials from the environment.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │              ATLAS PROVIDER                   │
//!                     │                                               │
//!   Client Request    │  ┌─────────┐    ┌────────────┐               │
//!   ──────────────────┼─▶│  http   │───▶│ dispatcher │               │
//!                     │  │ server  │    │ (by method)│               │
//!                     │  └─────────┘    └─────┬──────┘               │
//!                     │                       │                       │
//!                     │                       ▼                       │
//!   Client Response   │  ┌─────────┐    ┌────────────┐               │
//!   ◀─────────────────┼──│ error / │◀───│   atlas    │◀──────────────┼── Atlas API
//!                     │  │ json    │    │   client   │  digest auth  │
//!                     │  └─────────┘    └────────────┘               │
//!                     │                                               │
//!                     │  ┌─────────────────────────────────────────┐ │
//!                     │  │       Cross-Cutting Concerns             │ │
//!                     │  │  config (env)   tracing   request IDs   │ │
//!                     │  └─────────────────────────────────────────┘ │
//!                     └──────────────────────────────────────────────┘
//! ```

pub mod atlas;
pub mod config;
pub mod http;

pub use config::schema::Settings;
pub use http::HttpServer;
