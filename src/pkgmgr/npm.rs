use crate::error::{Result, WhatsnewError};
use crate::pkgmgr::{
    parse_dependency_listing, parse_registry_versions, InstalledDependency, PackageManagerAdapter,
};
use crate::utils::spawn::run_command;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Built-in adapter shelling out to the `npm` binary.
pub struct NpmAdapter {
    project_path: PathBuf,
}

impl NpmAdapter {
    pub fn new<P: AsRef<Path>>(project_path: P) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    fn manifest_path(&self) -> PathBuf {
        self.project_path.join("package.json")
    }

    /// Point the manifest entries for `package` at `version`, under both
    /// `dependencies` and `devDependencies`, leaving the rest of the
    /// document untouched.
    fn rewrite_manifest(&self, package: &str, version: &str) -> Result<()> {
        let manifest_path = self.manifest_path();
        let content = fs::read_to_string(&manifest_path).map_err(|e| {
            WhatsnewError::ManifestEdit(format!(
                "Failed to read {}: {}",
                manifest_path.display(),
                e
            ))
        })?;
        let mut manifest: serde_json::Value = serde_json::from_str(&content)?;

        for section in ["dependencies", "devDependencies"] {
            if let Some(entries) = manifest.get_mut(section).and_then(|v| v.as_object_mut()) {
                if let Some(entry) = entries.get_mut(package) {
                    *entry = serde_json::Value::String(version.to_string());
                }
            }
        }

        fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
        Ok(())
    }
}

impl PackageManagerAdapter for NpmAdapter {
    fn name(&self) -> &str {
        "npm"
    }

    fn list_dependencies(&self) -> Option<HashMap<String, InstalledDependency>> {
        let result = run_command("npm", &["ls", "--json", "--depth=0"], &self.project_path);
        if !result.succeeded() {
            return None;
        }
        parse_dependency_listing(&result.stdout)
    }

    fn registry_versions(&self, package: &str) -> Option<Vec<String>> {
        let result = run_command(
            "npm",
            &["view", "--json", package, "versions"],
            &self.project_path,
        );
        if !result.succeeded() {
            return None;
        }
        parse_registry_versions(&result.stdout)
    }

    fn apply_package_update(&self, package: &str, version: &str) -> Result<()> {
        self.rewrite_manifest(package, version)?;

        let result = run_command("npm", &["install"], &self.project_path);
        if !result.succeeded() {
            return Err(WhatsnewError::CommandExecution(format!(
                "npm install exited with {:?}: {}",
                result.code,
                result.stderr.trim()
            )));
        }

        print!("{}", result.stdout);
        Ok(())
    }
}
