use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rewriting a target file.
#[derive(Error, Debug)]
pub enum RewriteError {
    /// The target could not be read; nothing has been written yet.
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One of the opening patterns failed to compile
    #[error("invalid opening pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenient alias over [`Result`] using [`RewriteError`]
pub type Result<T> = std::result::Result<T, RewriteError>;
