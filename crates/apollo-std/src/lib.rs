//! Filesystem and terminal helpers shared by every crate in the `apollo` workspace.

mod error;
mod fs;
mod style;

pub mod print;

pub use error::ApolloStdError;
pub use fs::Fs;
pub use style::Style;
