use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "docdrift",
    version,
    about = "Check that controllers, policies and critical commands are documented"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Repository root holding src/ and docs/"
    )]
    pub repo: PathBuf,
    #[arg(
        long,
        global = true,
        help = "Layout overlay (defaults to <repo>/docdrift.toml when present)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify documentation coverage (default)
    Check {
        #[arg(
            long,
            default_value_t = false,
            help = "Evaluate every category instead of stopping at the first gap"
        )]
        keep_going: bool,
    },
    /// List the identifiers each check expects to find
    Inventory,
}
