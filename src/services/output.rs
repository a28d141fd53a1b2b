use crate::domain::constants::SUCCESS_MESSAGE;
use crate::domain::models::{DriftReport, JsonOut};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_report(json: bool, report: &DriftReport) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: report.passed(),
                data: report
            })?
        );
    } else {
        print!("{}", render_report(report));
    }
    Ok(())
}

/// Plain-text report: each failing title followed by `- <identifier>` lines,
/// or the single success line.
pub fn render_report(report: &DriftReport) -> String {
    if report.passed() {
        return format!("{}\n", SUCCESS_MESSAGE);
    }
    let mut out = String::new();
    for failure in report.failures() {
        out.push_str(&failure.title);
        out.push('\n');
        for item in &failure.missing {
            out.push_str(&format!("- {}\n", item));
        }
    }
    out
}
