use crate::config::Config;
use crate::error::{Result, WhatsnewError};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

pub mod custom;
pub mod npm;

pub use custom::CustomAdapter;
pub use npm::NpmAdapter;

/// Installed dependency entry as reported by the package manager listing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InstalledDependency {
    pub version: String,
}

/// Capability set a package manager must provide to the planner.
///
/// The listing and registry queries return `None` on any failure (spawn
/// error, non-zero exit, unparsable output); the orchestrator reports and
/// stops instead of retrying. Applying an update is the one operation whose
/// failure is surfaced as an error.
pub trait PackageManagerAdapter: Send + Sync {
    fn name(&self) -> &str;

    /// Top-level installed dependencies, keyed by package name.
    fn list_dependencies(&self) -> Option<HashMap<String, InstalledDependency>>;

    /// Every version the registry offers for `package`, publication order.
    fn registry_versions(&self, package: &str) -> Option<Vec<String>>;

    /// Rewrite the persisted manifest entry for `package` and reinstall.
    fn apply_package_update(&self, package: &str, version: &str) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct DependencyListing {
    #[serde(default)]
    dependencies: Option<HashMap<String, InstalledDependency>>,
}

/// Parse an npm-shaped dependency listing; a document without a
/// `dependencies` object counts as a failed listing.
pub(crate) fn parse_dependency_listing(
    stdout: &str,
) -> Option<HashMap<String, InstalledDependency>> {
    let listing: DependencyListing = serde_json::from_str(stdout).ok()?;
    listing.dependencies
}

/// `npm view --json <pkg> versions` prints an array, except for packages
/// with a single published version, which come back as a bare string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RegistryVersions {
    Many(Vec<String>),
    One(String),
}

pub(crate) fn parse_registry_versions(stdout: &str) -> Option<Vec<String>> {
    match serde_json::from_str::<RegistryVersions>(stdout).ok()? {
        RegistryVersions::Many(versions) => Some(versions),
        RegistryVersions::One(version) => Some(vec![version]),
    }
}

/// Built-in package manager identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltInPackageManager {
    Npm,
}

impl BuiltInPackageManager {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "npm" => Some(Self::Npm),
            _ => None,
        }
    }

    fn create(self, project_path: &Path) -> Arc<dyn PackageManagerAdapter> {
        match self {
            Self::Npm => Arc::new(NpmAdapter::new(project_path)),
        }
    }
}

pub struct AdapterFactory;

impl AdapterFactory {
    /// Resolve a `--pkgmgr` selector against the built-in table first, then
    /// the config-declared custom adapters. No selector means autodetect.
    pub fn create(
        selector: Option<&str>,
        config: &Config,
        project_path: &Path,
    ) -> Result<Arc<dyn PackageManagerAdapter>> {
        match selector {
            Some(name) => {
                if let Some(builtin) = BuiltInPackageManager::from_name(name) {
                    return Ok(builtin.create(project_path));
                }
                if let Some(commands) = config.pkgmgr.get(name) {
                    return Ok(Arc::new(CustomAdapter::new(
                        name,
                        commands.clone(),
                        project_path,
                    )));
                }
                Err(WhatsnewError::UnknownPackageManager(name.to_string()))
            }
            // npm-style projects are the only built-in target today
            None => Ok(BuiltInPackageManager::Npm.create(project_path)),
        }
    }
}
