//! Settings shared by every command.

use serde::{Deserialize, Serialize};

/// Rows returned by `list` commands when neither `--limit` nor a
/// per-command limit is given.
pub const DEFAULT_LIST_LIMIT: u32 = 20;

const fn list_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    #[serde(default = "list_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIST_LIMIT,
        }
    }
}
