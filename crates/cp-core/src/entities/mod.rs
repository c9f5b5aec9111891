//! Entity records for all Coparent REST resources.
//!
//! Field names match the API's JSON. Every struct derives `Serialize` and
//! `Deserialize` so records can be re-emitted by the CLI unchanged.

mod child;
mod journal;
mod message;
mod plan;
mod user;
mod visit;

pub use child::Child;
pub use journal::JournalEntry;
pub use message::Message;
pub use plan::{ParentingPlan, PlanInvite};
pub use user::User;
pub use visit::Visit;
