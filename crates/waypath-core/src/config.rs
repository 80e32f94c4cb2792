//! Network configuration for waypath
//!
//! Configuration is read from `waypath.toml`. Lookup order:
//! 1. an explicit path (`--config`, or `WAYPATH_CONFIG` via the CLI)
//! 2. `waypath.toml` in the working directory
//! 3. `waypath/config.toml` in the user config directory
//!
//! With none of these present, built-in defaults apply.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WaypathError};
use crate::load::LoadOptions;

pub use types::{
    DataConfig, LoadConfig, NetworkConfig, QueryConfig, DEFAULT_EDGES_FILE, DEFAULT_NODES_FILE,
};

/// Config file name looked up in the working directory
pub const CONFIG_FILE: &str = "waypath.toml";

const CONFIG_DIR: &str = "waypath";
const USER_CONFIG_FILE: &str = "config.toml";

impl NetworkConfig {
    /// Load configuration from a file.
    /// Relative data paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| WaypathError::io_operation("read config", path.display(), e))?;
        let mut config: NetworkConfig = toml::from_str(&content)?;

        if let Some(base) = path.parent() {
            config.data.nodes = resolve_against(base, &config.data.nodes);
            config.data.edges = resolve_against(base, &config.data.edges);
        }
        config.source = Some(path.to_path_buf());

        Ok(config)
    }

    /// Find and load the configuration for a run rooted at `cwd`
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let user_dir = dirs::config_dir();

        match resolve_config_path(explicit, cwd, user_dir.as_deref()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "load_config");
                Self::load(&path)
            }
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loader options derived from this configuration
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            strict: self.load.strict,
        }
    }
}

fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Pick the config file to read. An explicit path is returned even if
/// missing so that loading reports the error.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    cwd: &Path,
    user_config_dir: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(resolve_against(cwd, path));
    }

    let local = cwd.join(CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    user_config_dir
        .map(|dir| dir.join(CONFIG_DIR).join(USER_CONFIG_FILE))
        .filter(|path| path.is_file())
}
