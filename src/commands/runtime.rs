use crate::cli::{Cli, Commands};
use crate::domain::models::{CheckCategory, Layout};
use crate::services::collectors::collect_inventory;
use crate::services::documents::Documents;
use crate::services::gate::{run_checks, Evaluation};
use crate::services::output::{print_out, print_report};
use serde::Serialize;
use std::process::ExitCode;

#[derive(Serialize)]
struct InventoryEntry {
    category: CheckCategory,
    identifier: String,
}

pub fn handle_runtime_commands(cli: &Cli, layout: &Layout) -> anyhow::Result<ExitCode> {
    match &cli.command {
        None => check(cli, layout, false),
        Some(Commands::Check { keep_going }) => check(cli, layout, *keep_going),
        Some(Commands::Inventory) => {
            let inventory = collect_inventory(layout)?;
            let entries: Vec<InventoryEntry> = CheckCategory::ORDER
                .into_iter()
                .flat_map(|category| {
                    inventory
                        .identifiers(category)
                        .iter()
                        .map(move |id| InventoryEntry {
                            category,
                            identifier: id.clone(),
                        })
                })
                .collect();
            print_out(cli.json, &entries, |e| {
                format!("{}\t{}", e.category.label(), e.identifier)
            })?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn check(cli: &Cli, layout: &Layout, keep_going: bool) -> anyhow::Result<ExitCode> {
    tracing::info!(repo = %layout.root.display(), keep_going, "running doc drift checks");
    let docs = Documents::load(layout)?;
    let mode = if keep_going {
        Evaluation::KeepGoing
    } else {
        Evaluation::FailFast
    };
    let report = run_checks(layout, &docs, mode)?;
    print_report(cli.json, &report)?;
    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
