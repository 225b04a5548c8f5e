use crate::config::Config;
use crate::error::{Result, WhatsnewError};
use crate::pkgmgr::AdapterFactory;
use crate::report;
use crate::upgrade::{construct_upgrade_plan, semver_major_partition};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Options controlling one planning run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanOptions {
    pub allow_prerelease: bool,
    pub apply_next_step: bool,
}

/// Execute the upgrade-path workflow for one dependency.
pub fn execute_plan<P: AsRef<Path>>(
    project_path: P,
    dependency: &str,
    pkgmgr: Option<&str>,
    options: PlanOptions,
) -> Result<()> {
    let project_path = project_path.as_ref();
    if !project_path.is_dir() {
        return Err(WhatsnewError::ProjectValidation(format!(
            "Project directory '{}' not found",
            project_path.display()
        )));
    }

    let config = Config::load(project_path)?;
    let manager = AdapterFactory::create(pkgmgr, &config, project_path)?;
    println!(
        "{}",
        format!(
            "Checking upgrade path for `{}` via {}...",
            dependency,
            manager.name()
        )
        .cyan()
        .bold()
    );

    let installed = manager
        .list_dependencies()
        .and_then(|deps| deps.get(dependency).cloned());
    let Some(installed) = installed else {
        eprintln!("Dependency `{dependency}` not found");
        return Ok(());
    };
    let current_version = installed.version;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Fetching registry versions for {dependency}"));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let fetched = manager.registry_versions(dependency);
    spinner.finish_and_clear();

    let Some(versions) = fetched else {
        eprintln!("No versions found for {dependency}");
        return Ok(());
    };

    if std::env::var("WHATSNEW_VERBOSE").is_ok() {
        let bands = semver_major_partition(&versions);
        println!("Registry has {} major band(s):", bands.len());
        for band in &bands {
            println!(
                "  major {}: {} ({} versions)",
                band.major,
                band.range,
                band.versions.len()
            );
        }
    }

    let plan = construct_upgrade_plan(&versions, &current_version, options.allow_prerelease);
    report::print_upgrade_report(dependency, &current_version, &plan, options.apply_next_step);

    if options.apply_next_step && !plan.is_empty() {
        let first = &plan[0];
        println!(
            "\n{}",
            format!(
                "Upgrading {} from {} to {}...",
                dependency, first.current, first.target
            )
            .yellow()
        );
        manager.apply_package_update(dependency, &first.target.to_string())?;
        println!(
            "{}",
            format!("✓ {} upgraded to {}", dependency, first.target).green()
        );
    }

    Ok(())
}
