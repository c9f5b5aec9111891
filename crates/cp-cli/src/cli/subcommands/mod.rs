pub mod auth;
pub mod children;
pub mod journal;
pub mod messages;
pub mod plans;
pub mod visits;

pub use auth::AuthCommands;
pub use children::ChildrenCommands;
pub use journal::JournalCommands;
pub use messages::MessagesCommands;
pub use plans::PlansCommands;
pub use visits::VisitsCommands;
