use crate::domain::constants::CONFIG_FILE_NAME;
use crate::domain::models::{Layout, LayoutOverlay};
use crate::error::DriftError;
use std::path::{Path, PathBuf};

/// Builds the run layout for `root`, applying `docdrift.toml` (or the explicit
/// `config`) on top of the defaults.
pub fn load_layout(root: &Path, config: Option<&Path>) -> Result<Layout, DriftError> {
    let mut layout = Layout::with_defaults(root);
    let path = match config {
        Some(p) => p.to_path_buf(),
        None => {
            let p = root.join(CONFIG_FILE_NAME);
            if !p.exists() {
                tracing::debug!(root = %root.display(), "no config overlay, using defaults");
                return Ok(layout);
            }
            p
        }
    };

    let raw = std::fs::read_to_string(&path).map_err(|e| DriftError::missing(&path, e))?;
    let overlay: LayoutOverlay = toml::from_str(&raw).map_err(|source| DriftError::Config {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(config = %path.display(), "applying config overlay");
    apply_overlay(&mut layout, overlay);
    Ok(layout)
}

fn apply_overlay(layout: &mut Layout, overlay: LayoutOverlay) {
    fn set(slot: &mut PathBuf, value: Option<PathBuf>) {
        if let Some(v) = value {
            *slot = v;
        }
    }

    set(&mut layout.controllers_dir, overlay.controllers_dir);
    set(&mut layout.policies_file, overlay.policies_file);
    set(&mut layout.imports_dir, overlay.imports_dir);
    set(&mut layout.reports_dir, overlay.reports_dir);
    set(&mut layout.api_doc, overlay.api_doc);
    set(&mut layout.application_doc, overlay.application_doc);

    if let Some(ext) = overlay.source_extension {
        layout.source_extension = ext.trim_start_matches('.').to_string();
    }
    if let Some(base) = overlay.controller_base_class {
        layout.controller_base_class = base;
    }
    if let Some(prefix) = overlay.policy_prefix {
        layout.policy_prefix = prefix;
    }
    if let Some(commands) = overlay.critical_manual_commands {
        layout.critical_manual_commands = commands
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
    }
}
