mod output;
mod project;

pub use output::OutputOpts;
pub use project::ProjectOpts;
