pub(crate) mod output;
mod queries;
mod schema;

pub use output::ApolloOutput;
pub use queries::Queries;
pub use schema::Schema;
