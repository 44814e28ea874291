//! Networking: the API gateway and everything it is built from.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` owns interception and dispatch, `api` exposes the grouped
//! endpoints, `session` persists the credential, `transport` performs the
//! HTTP exchange, and `types` defines the wire schema.

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod request;
pub mod session;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ClientConfig;
pub use error::{ApiError, TransportError};
pub use gateway::Gateway;
pub use request::{ApiCall, ApiResponse, Method};
pub use session::{MemoryStore, Session, SessionStore};
pub use transport::{FetchTransport, Transport};

/// Gateway wired to the browser's `fetch`.
pub type BrowserGateway = Gateway<FetchTransport>;
