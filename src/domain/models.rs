use crate::domain::constants::{
    API_DOC, APPLICATION_DOC, CONTROLLERS_DIR, CONTROLLER_BASE_CLASS, CRITICAL_MANUAL_COMMANDS,
    IMPORTS_DIR, POLICIES_FILE, POLICY_PREFIX, REPORTS_DIR, SOURCE_EXTENSION,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Deduplicated identifiers; iteration order is the rendered (sorted) order.
pub type IdentifierSet = BTreeSet<String>;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Where sources and docs live inside the repository.
///
/// Paths other than `root` are repo-relative as configured; use
/// [`Layout::resolve`] to get a filesystem path. Built once at startup and
/// only read afterwards.
#[derive(Debug, Clone)]
pub struct Layout {
    pub root: PathBuf,
    pub controllers_dir: PathBuf,
    pub policies_file: PathBuf,
    pub imports_dir: PathBuf,
    pub reports_dir: PathBuf,
    pub api_doc: PathBuf,
    pub application_doc: PathBuf,
    pub source_extension: String,
    pub controller_base_class: String,
    pub policy_prefix: String,
    pub critical_manual_commands: Vec<String>,
}

impl Layout {
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            controllers_dir: PathBuf::from(CONTROLLERS_DIR),
            policies_file: PathBuf::from(POLICIES_FILE),
            imports_dir: PathBuf::from(IMPORTS_DIR),
            reports_dir: PathBuf::from(REPORTS_DIR),
            api_doc: PathBuf::from(API_DOC),
            application_doc: PathBuf::from(APPLICATION_DOC),
            source_extension: SOURCE_EXTENSION.to_string(),
            controller_base_class: CONTROLLER_BASE_CLASS.to_string(),
            policy_prefix: POLICY_PREFIX.to_string(),
            critical_manual_commands: CRITICAL_MANUAL_COMMANDS
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }

    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    pub fn document_path(&self, doc: DocumentKind) -> &Path {
        match doc {
            DocumentKind::Api => &self.api_doc,
            DocumentKind::Application => &self.application_doc,
        }
    }
}

/// Optional `docdrift.toml` overlay. Absent keys keep the defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LayoutOverlay {
    #[serde(default)]
    pub controllers_dir: Option<PathBuf>,
    #[serde(default)]
    pub policies_file: Option<PathBuf>,
    #[serde(default)]
    pub imports_dir: Option<PathBuf>,
    #[serde(default)]
    pub reports_dir: Option<PathBuf>,
    #[serde(default)]
    pub api_doc: Option<PathBuf>,
    #[serde(default)]
    pub application_doc: Option<PathBuf>,
    #[serde(default)]
    pub source_extension: Option<String>,
    #[serde(default)]
    pub controller_base_class: Option<String>,
    #[serde(default)]
    pub policy_prefix: Option<String>,
    #[serde(default)]
    pub critical_manual_commands: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Api,
    Application,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckCategory {
    Controllers,
    Policies,
    CriticalCommands,
}

impl CheckCategory {
    /// Fixed evaluation order; observable through which failure prints first.
    pub const ORDER: [CheckCategory; 3] = [
        CheckCategory::Controllers,
        CheckCategory::Policies,
        CheckCategory::CriticalCommands,
    ];

    pub fn document(self) -> DocumentKind {
        match self {
            CheckCategory::Controllers | CheckCategory::Policies => DocumentKind::Api,
            CheckCategory::CriticalCommands => DocumentKind::Application,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckCategory::Controllers => "controllers",
            CheckCategory::Policies => "policies",
            CheckCategory::CriticalCommands => "critical commands",
        }
    }

    pub fn title(self, doc: &Path) -> String {
        format!("Missing {} in {}:", self.label(), doc.display())
    }
}

/// Collected identifier sets, one per category.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Inventory {
    pub controllers: IdentifierSet,
    pub policies: IdentifierSet,
    pub critical_commands: IdentifierSet,
}

impl Inventory {
    pub fn identifiers(&self, category: CheckCategory) -> &IdentifierSet {
        match category {
            CheckCategory::Controllers => &self.controllers,
            CheckCategory::Policies => &self.policies,
            CheckCategory::CriticalCommands => &self.critical_commands,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResult {
    pub category: CheckCategory,
    pub title: String,
    pub document: String,
    pub checked: usize,
    /// Sorted identifiers absent from `document`. Empty means covered.
    pub missing: Vec<String>,
}

impl CategoryResult {
    pub fn passed(&self) -> bool {
        self.missing.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Passed,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct DriftReport {
    pub status: CheckStatus,
    /// Evaluated categories in order. Fail-fast runs stop at the first gap.
    pub results: Vec<CategoryResult>,
}

impl DriftReport {
    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }

    pub fn failures(&self) -> impl Iterator<Item = &CategoryResult> {
        self.results.iter().filter(|r| !r.passed())
    }
}
