//! Identifier collectors.
//!
//! Identifiers come from naming conventions (file stems, constant
//! declarations), not from parsing the sources.

use crate::domain::constants::{COMMAND_COMPANION_SUFFIXES, COMMAND_SUFFIX, CONTROLLER_SUFFIX};
use crate::domain::models::{CheckCategory, IdentifierSet, Inventory, Layout};
use crate::error::DriftError;
use regex::Regex;
use std::path::Path;
use walkdir::WalkDir;

const POLICY_DECLARATION: &str = r#"public const string (\w+)\s*=\s*"[^"]+";"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDepth {
    Shallow,
    Recursive,
}

pub fn collect_category(
    layout: &Layout,
    category: CheckCategory,
) -> Result<IdentifierSet, DriftError> {
    match category {
        CheckCategory::Controllers => collect_controllers(layout),
        CheckCategory::Policies => collect_policies(layout),
        CheckCategory::CriticalCommands => collect_critical_commands(layout),
    }
}

pub fn collect_inventory(layout: &Layout) -> Result<Inventory, DriftError> {
    Ok(Inventory {
        controllers: collect_controllers(layout)?,
        policies: collect_policies(layout)?,
        critical_commands: collect_critical_commands(layout)?,
    })
}

pub fn collect_controllers(layout: &Layout) -> Result<IdentifierSet, DriftError> {
    let dir = layout.resolve(&layout.controllers_dir);
    let controllers: IdentifierSet =
        source_stems(&dir, &layout.source_extension, ScanDepth::Shallow)?
            .into_iter()
            .filter(|stem| stem.ends_with(CONTROLLER_SUFFIX))
            .filter(|stem| *stem != layout.controller_base_class)
            .collect();
    if controllers.is_empty() {
        tracing::warn!(dir = %dir.display(), "no controllers found");
    }
    Ok(controllers)
}

pub fn collect_policies(layout: &Layout) -> Result<IdentifierSet, DriftError> {
    let path = layout.resolve(&layout.policies_file);
    let source = std::fs::read_to_string(&path).map_err(|e| DriftError::missing(&path, e))?;
    let policies = extract_policy_constants(&source, &layout.policy_prefix)?;
    tracing::debug!(file = %path.display(), count = policies.len(), "collected policies");
    Ok(policies)
}

/// Names of `public const string X = "...";` declarations starting with `prefix`.
pub fn extract_policy_constants(source: &str, prefix: &str) -> Result<IdentifierSet, DriftError> {
    let re = Regex::new(POLICY_DECLARATION)?;
    Ok(re
        .captures_iter(source)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|name| name.starts_with(prefix))
        .map(str::to_string)
        .collect())
}

/// Pinned critical commands plus everything under Imports (deep) and Reports
/// (top level only).
pub fn collect_critical_commands(layout: &Layout) -> Result<IdentifierSet, DriftError> {
    let mut commands: IdentifierSet = layout.critical_manual_commands.iter().cloned().collect();
    commands.extend(collect_commands(
        &layout.resolve(&layout.imports_dir),
        &layout.source_extension,
        ScanDepth::Recursive,
    )?);
    commands.extend(collect_commands(
        &layout.resolve(&layout.reports_dir),
        &layout.source_extension,
        ScanDepth::Shallow,
    )?);
    Ok(commands)
}

pub fn collect_commands(
    dir: &Path,
    extension: &str,
    depth: ScanDepth,
) -> Result<IdentifierSet, DriftError> {
    let commands: IdentifierSet = source_stems(dir, extension, depth)?
        .into_iter()
        .filter(|stem| is_command_stem(stem))
        .collect();
    tracing::debug!(dir = %dir.display(), ?depth, count = commands.len(), "collected commands");
    Ok(commands)
}

fn is_command_stem(stem: &str) -> bool {
    stem.ends_with(COMMAND_SUFFIX)
        && !COMMAND_COMPANION_SUFFIXES
            .iter()
            .any(|suffix| stem.ends_with(suffix))
}

/// File stems of regular files in `dir` carrying `extension`.
fn source_stems(dir: &Path, extension: &str, depth: ScanDepth) -> Result<Vec<String>, DriftError> {
    // A missing root must fail the run, not read as an empty directory.
    std::fs::read_dir(dir).map_err(|e| DriftError::missing(dir, e))?;

    let mut walker = WalkDir::new(dir).min_depth(1).sort_by_file_name();
    if depth == ScanDepth::Shallow {
        walker = walker.max_depth(1);
    }

    let mut stems = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| DriftError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|x| x.to_str()) != Some(extension) {
            continue;
        }
        match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) if !stem.is_empty() => stems.push(stem.to_string()),
            _ => tracing::debug!(path = %path.display(), "skipping non-utf8 file name"),
        }
    }
    Ok(stems)
}
