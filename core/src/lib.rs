//! Blocking client for the Unsent email API.
//!
//! # Overview
//! [`Unsent`] is the single entry point. It owns the configuration and a
//! transport, and hands out one resource client per API area:
//!
//! ```no_run
//! use unsent::{types::SendEmail, Unsent};
//!
//! let client = Unsent::new("un_xxx")?;
//! let email = SendEmail::new("hello@example.com", "user@example.com")
//!     .subject("Welcome")
//!     .html("<p>Hi</p>");
//! let sent = client.emails().send(&email)?;
//! println!("queued {}", sent.email_id);
//! # Ok::<(), unsent::Error>(())
//! ```
//!
//! # Design
//! - Every call is split into `build_request` (pure, produces an
//!   [`HttpRequest`]) and `parse_response` (pure, consumes an
//!   [`HttpResponse`]), joined by one [`Transport::execute`]. The default
//!   transport is [`UreqTransport`]; tests plug in their own.
//! - Non-2xx responses are normalized into [`ApiError`] whichever of the
//!   API's two error shapes the body uses.
//! - DTOs in [`types`] are defined independently from the mock-server crate;
//!   integration tests catch schema drift.
//! - No retries, caching, or rate limiting. Each call is one round trip.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod resources;
pub mod types;

pub use client::{RequestOptions, Unsent};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{ApiError, Error, Result, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use query::Query;
