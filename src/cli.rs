use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "whatsnew",
    about = "Compute a staged upgrade path for a dependency, major by major, and optionally apply the next step",
    version,
    author
)]
pub struct Cli {
    /// Name of the dependency to be checked
    #[arg(value_name = "DEPENDENCY")]
    pub dependency: String,

    /// Allow prereleases to be considered in the upgrade path
    #[arg(long)]
    pub prerelease: bool,

    /// Apply the next upgrade step if available
    #[arg(long)]
    pub apply: bool,

    /// The package manager (e.g. `npm`) to use; autodetected if not set
    #[arg(long, value_name = "NAME")]
    pub pkgmgr: Option<String>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
