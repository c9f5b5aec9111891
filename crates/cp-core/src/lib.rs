//! # cp-core
//!
//! Core types shared across all Coparent crates:
//! - Entity records for the REST resources (users, children, plans, visits, ...)
//! - Status enums, with the invite state machine
//! - Request payloads and response envelopes
//! - Form validation and date formatting helpers
//! - Dashboard tallies
//! - Cross-cutting error types

pub mod dashboard;
pub mod date_serde;
pub mod datefmt;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod payloads;
pub mod responses;
pub mod validation;

pub use errors::CoreError;
