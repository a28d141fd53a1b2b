use crate::domain::models::{CategoryResult, CheckCategory, CheckStatus, DriftReport, Layout};
use crate::error::DriftError;
use crate::services::collectors::collect_category;
use crate::services::documents::Documents;
use crate::services::matcher::missing_identifiers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Stop at the first category with gaps.
    FailFast,
    KeepGoing,
}

/// Runs the categories in [`CheckCategory::ORDER`].
///
/// Sources for a category are only collected when that category is reached,
/// so a fail-fast run never touches inputs of later categories.
pub fn run_checks(
    layout: &Layout,
    docs: &Documents,
    mode: Evaluation,
) -> Result<DriftReport, DriftError> {
    let mut results = Vec::new();
    for category in CheckCategory::ORDER {
        let result = evaluate(layout, docs, category)?;
        let failed = !result.passed();
        results.push(result);
        if failed && mode == Evaluation::FailFast {
            break;
        }
    }

    let status = if results.iter().all(CategoryResult::passed) {
        CheckStatus::Passed
    } else {
        CheckStatus::Failed
    };
    tracing::info!(?status, evaluated = results.len(), "doc drift checks finished");
    Ok(DriftReport { status, results })
}

pub fn evaluate(
    layout: &Layout,
    docs: &Documents,
    category: CheckCategory,
) -> Result<CategoryResult, DriftError> {
    let identifiers = collect_category(layout, category)?;
    let doc = layout.document_path(category.document());
    let missing = missing_identifiers(&identifiers, docs.text(category.document()))?;
    tracing::debug!(
        category = category.label(),
        checked = identifiers.len(),
        missing = missing.len(),
        "evaluated category"
    );
    Ok(CategoryResult {
        category,
        title: category.title(doc),
        document: doc.display().to_string(),
        checked: identifiers.len(),
        missing,
    })
}
