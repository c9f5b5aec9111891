//! Resource services: one module per REST resource.
//!
//! Each call goes through [`ApiClient`](crate::ApiClient), unwraps one named
//! envelope field, and returns it typed. No validation, caching, or retry.

pub mod auth;
pub mod children;
pub mod journal;
pub mod messages;
pub mod plans;
pub mod visits;
