use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File rewritten in place by the binary.
pub const DEFAULT_TARGET: &str = "src/components/auth/PhoneVerification.tsx";

/// Key the original object literal gets nested under.
pub const DEFAULT_WRAPPER_KEY: &str = "data";

/// Printed to stdout once the target has been rewritten.
pub const CONFIRMATION_MESSAGE: &str = "Logger calls rewritten successfully!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    pub target: PathBuf,
    pub wrapper_key: String,
}

impl RewriteConfig {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
            wrapper_key: DEFAULT_WRAPPER_KEY.to_string(),
        }
    }
}
