//! Synchronous client for the Form3-style accounts API.
//!
//! # Overview
//! Covers create, fetch and delete of the `accounts` resource. Every call is
//! a single blocking HTTP round-trip; nothing is cached or retried.
//!
//! # Design
//! - `Transport` owns one pooled `ureq::Agent` and turns plain-data
//!   `HttpRequest` values into `HttpResponse` values.
//! - `AccountClient` splits each operation into `build_*` (produces a
//!   request) and `parse_*` (classifies a response). The plain `fetch`,
//!   `create` and `delete` methods run build, execute and parse in sequence.
//! - The base URL is a per-call argument, so one client can talk to several
//!   deployments.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{AccountClient, ACCOUNT_CONTENT_TYPE};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse, QueryParams};
pub use transport::Transport;
pub use types::{Account, AccountAttributes, Envelope, ACCOUNT_TYPE};
