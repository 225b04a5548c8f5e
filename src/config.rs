use crate::error::{Result, WhatsnewError};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = ".whatsnew.toml";

/// Project-level configuration. Custom package managers are declared under
/// `[pkgmgr.<name>]` tables and become selectable via `--pkgmgr <name>`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub pkgmgr: HashMap<String, CommandSet>,
}

/// Argv templates for one custom package manager. `{package}` and
/// `{version}` placeholders are substituted before spawning; `list` and
/// `versions` must print npm-shaped JSON on stdout.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CommandSet {
    pub list: Vec<String>,
    pub versions: Vec<String>,
    #[serde(default)]
    pub update: Option<Vec<String>>,
}

impl Config {
    /// Load the config from the project directory; a missing file is an
    /// empty config.
    pub fn load<P: AsRef<Path>>(project_path: P) -> Result<Self> {
        let path = project_path.as_ref().join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            WhatsnewError::ConfigParsing(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Ok(toml::from_str(&content)?)
    }
}
