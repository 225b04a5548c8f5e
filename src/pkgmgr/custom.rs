use crate::config::CommandSet;
use crate::error::{Result, WhatsnewError};
use crate::pkgmgr::{
    parse_dependency_listing, parse_registry_versions, InstalledDependency, PackageManagerAdapter,
};
use crate::utils::spawn::run_command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Adapter declared in `.whatsnew.toml` as argv templates.
///
/// The `list` and `versions` commands must print the same JSON shapes npm
/// does; `update` is optional and owns the whole manifest rewrite and
/// reinstall on the custom tool's side.
pub struct CustomAdapter {
    name: String,
    commands: CommandSet,
    project_path: PathBuf,
}

impl CustomAdapter {
    pub fn new<P: AsRef<Path>>(name: &str, commands: CommandSet, project_path: P) -> Self {
        Self {
            name: name.to_string(),
            commands,
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    fn render(template: &[String], package: &str, version: &str) -> Vec<String> {
        template
            .iter()
            .map(|part| part.replace("{package}", package).replace("{version}", version))
            .collect()
    }

    fn run(&self, argv: &[String]) -> Option<String> {
        let (program, args) = argv.split_first()?;
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let result = run_command(program, &args, &self.project_path);
        if !result.succeeded() {
            return None;
        }
        Some(result.stdout)
    }
}

impl PackageManagerAdapter for CustomAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    fn list_dependencies(&self) -> Option<HashMap<String, InstalledDependency>> {
        let stdout = self.run(&self.commands.list)?;
        parse_dependency_listing(&stdout)
    }

    fn registry_versions(&self, package: &str) -> Option<Vec<String>> {
        let argv = Self::render(&self.commands.versions, package, "");
        let stdout = self.run(&argv)?;
        parse_registry_versions(&stdout)
    }

    fn apply_package_update(&self, package: &str, version: &str) -> Result<()> {
        let Some(update) = &self.commands.update else {
            return Err(WhatsnewError::CommandExecution(format!(
                "Custom package manager `{}` defines no update command",
                self.name
            )));
        };

        let argv = Self::render(update, package, version);
        let (program, args) = argv.split_first().ok_or_else(|| {
            WhatsnewError::CommandExecution(format!(
                "Custom package manager `{}` has an empty update command",
                self.name
            ))
        })?;
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        let result = run_command(program, &args, &self.project_path);
        if !result.succeeded() {
            return Err(WhatsnewError::CommandExecution(format!(
                "{} exited with {:?}: {}",
                program,
                result.code,
                result.stderr.trim()
            )));
        }

        print!("{}", result.stdout);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands(update: Option<Vec<String>>) -> CommandSet {
        CommandSet {
            list: vec!["tool".into(), "ls".into()],
            versions: vec!["tool".into(), "versions".into(), "{package}".into()],
            update,
        }
    }

    #[test]
    fn substitutes_placeholders() {
        let argv = CustomAdapter::render(
            &["tool".into(), "add".into(), "{package}@{version}".into()],
            "left-pad",
            "1.3.0",
        );
        assert_eq!(argv, vec!["tool", "add", "left-pad@1.3.0"]);
    }

    #[test]
    fn apply_without_update_command_errors() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = CustomAdapter::new("tool", commands(None), dir.path());
        let err = adapter.apply_package_update("left-pad", "1.3.0").unwrap_err();
        assert!(err.to_string().contains("no update command"));
    }

    #[test]
    fn unrunnable_commands_degrade_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut set = commands(None);
        set.list = vec!["whatsnew-no-such-binary".into(), "ls".into()];
        set.versions = Vec::new();
        let adapter = CustomAdapter::new("tool", set, dir.path());

        assert_eq!(adapter.list_dependencies(), None);
        assert_eq!(adapter.registry_versions("left-pad"), None);
    }
}
