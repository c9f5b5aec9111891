//! Session persistence configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_DIR_NAME: &str = ".coparent";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Directory holding the `token` and `user` files. Empty = `~/.coparent`.
    #[serde(default)]
    pub dir: String,
}

impl SessionConfig {
    /// Resolved session directory, or `None` when no home directory exists.
    #[must_use]
    pub fn resolve_dir(&self) -> Option<PathBuf> {
        if self.dir.trim().is_empty() {
            dirs::home_dir().map(|home| home.join(DEFAULT_DIR_NAME))
        } else {
            Some(PathBuf::from(self.dir.trim()))
        }
    }
}
