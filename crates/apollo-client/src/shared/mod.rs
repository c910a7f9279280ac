mod change;
mod git_context;

pub use change::{Change, ChangeType, CheckOperationsResponse};
pub use git_context::GitContext;
