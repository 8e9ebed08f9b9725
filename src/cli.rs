//! Command-line argument surface.
use std::path::PathBuf;

use clap::Parser;

/// Scaffold a local WordPress development environment.
///
/// Writes `.env`, `docker-compose.yml` and a `config/` directory with a
/// plugin installer and PHP/Apache tuning files into the target directory.
/// Values not given as flags are prompted for when a terminal is attached.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wpdev",
    about = "Scaffold a local WordPress development environment",
    disable_version_flag = true
)]
pub struct Cli {
    /// Target directory (defaults to the current directory)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Project name (defaults to the directory name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// WordPress image version
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    pub wp_version: Option<String>,

    /// Host port WordPress is published on
    #[arg(short, long)]
    pub port: Option<String>,

    /// Space-separated plugin slugs to install on first start
    #[arg(short = 'e', long, value_name = "SLUGS")]
    pub plugins: Option<String>,

    /// TOML file supplying default values for the prompts
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Never prompt; use flag values and defaults only
    #[arg(long)]
    pub no_input: bool,

    /// Preview the files that would be written without touching the disk
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Disable parallel file writes (parallel is enabled by default)
    #[arg(long = "no-parallel", action = clap::ArgAction::SetFalse)]
    pub parallel: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}
