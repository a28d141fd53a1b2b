use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

use cli::Cli;
use commands::handle_runtime_commands;
use services::layout::load_layout;
use services::logging::init_logging;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log_json)?;

    let layout = load_layout(&cli.repo, cli.config.as_deref())?;
    handle_runtime_commands(&cli, &layout)
}
