//! Where to find the rulebook.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulebookConfig {
    /// Rulebook file (TOML or JSON). Relative paths resolve against the
    /// project root. `None` selects the built-in rulebook.
    pub path: Option<String>,
}

impl RulebookConfig {
    pub fn resolved_path(&self, root: &Path) -> Option<PathBuf> {
        self.path.as_ref().map(|p| {
            let p = Path::new(p);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                root.join(p)
            }
        })
    }
}
