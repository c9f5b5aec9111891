//! # cp-session
//!
//! The client's session cache: who is logged in, and the credential token
//! attached to API calls.
//!
//! A session is two keys, `token` and `user` (JSON), kept in a
//! [`SessionStorage`] backend. The CLI uses [`FileStorage`] under
//! `~/.coparent/`; tests use [`MemoryStorage`].

mod error;
mod expiry;
mod storage;
mod store;

pub use error::SessionError;
pub use expiry::{is_expired, token_expiry};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use store::{Session, SessionStore, TOKEN_ENV_VAR, TOKEN_KEY, TokenSource, USER_KEY};
