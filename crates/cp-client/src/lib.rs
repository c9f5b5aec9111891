//! # cp-client
//!
//! REST client for the Coparent API.
//!
//! - [`ApiClient`]: the authenticated request helper. Attaches the session's
//!   bearer token and JSON headers, and turns non-2xx responses into
//!   [`ApiError::Http`] carrying the body text (or status text).
//! - [`services`]: one module per resource, each unwrapping a named envelope field.
//! - [`invites`] and [`board`]: the plan-invitation workflow and the local,
//!   optimistically patched plan list.
//! - [`dashboard`]: cross-plan tallies.

pub mod board;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod invites;
pub mod services;

pub use board::PlanBoard;
pub use error::ApiError;
pub use http::{ApiClient, RequestOptions};
