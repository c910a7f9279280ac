use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApolloStdError {
    /// AdhocError comes from the anyhow crate
    #[error(transparent)]
    AdhocError(#[from] anyhow::Error),

    /// Thrown when a file that must have contents is empty
    #[error("\"{empty_file}\" is an empty file.")]
    EmptyFile {
        /// The empty file path
        empty_file: String,
    },

    /// Thrown when a path exists but is not a regular file
    #[error("'{path}' is not a file.")]
    NotAFile {
        /// The offending path
        path: String,
    },
}
