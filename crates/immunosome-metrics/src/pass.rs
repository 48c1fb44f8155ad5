use crate::metrics::{ResolutionMetrics, ALL_MODULES_LABEL};
use immunosome_core::diagram::DiagramDescription;
use immunosome_core::error::SelectionError;
use immunosome_core::report::Report;
use immunosome_core::selection::{RawSelection, SelectionState};
use immunosome_report::{build_module_report, build_report, FrameworkModule};
use serde::Serialize;
use signaling_diagram::build_diagram;
use tracing::warn;

/// Everything one user interaction resolves to.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolutionPass {
    pub selection: SelectionState,
    pub module: Option<FrameworkModule>,
    pub diagram: DiagramDescription,
    pub report: Report,
}

/// Validates the raw choices, then builds diagram and report. Nothing is
/// built when validation fails.
pub fn resolve(
    metrics: &ResolutionMetrics,
    raw: &RawSelection,
    module: Option<FrameworkModule>,
) -> Result<ResolutionPass, SelectionError> {
    let selection = SelectionState::try_from(raw).map_err(|e| {
        warn!(error = %e, "rejected selection");
        metrics.observe_invalid(&e);
        e
    })?;

    let diagram = build_diagram(&selection);
    let report = match module {
        Some(m) => build_module_report(&selection, m),
        None => build_report(&selection),
    };
    metrics.observe_resolution(
        &selection,
        module.map_or(ALL_MODULES_LABEL, FrameworkModule::slug),
    );

    Ok(ResolutionPass {
        selection,
        module,
        diagram,
        report,
    })
}
