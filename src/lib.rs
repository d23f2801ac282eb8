pub mod config;
pub mod error;
pub mod rewriter;
pub mod target;

pub use config::{RewriteConfig, CONFIRMATION_MESSAGE, DEFAULT_TARGET, DEFAULT_WRAPPER_KEY};
pub use error::{Result, RewriteError};
pub use target::rewrite_file;
