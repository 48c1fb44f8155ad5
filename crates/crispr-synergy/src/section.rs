use crate::comparison::synergy_comparison;
use crate::rationale::{failure_modes, synergy_context};
use immunosome_core::lookup::resolve_knockout;
use immunosome_core::report::{MetricValue, Report};
use immunosome_core::selection::{SelectionOption, SelectionState};
use tracing::debug;

pub fn crispr_synergy_section(selection: &SelectionState) -> Report {
    let target = selection.knockout_target();
    let profile = resolve_knockout(target);

    let mut report = Report::default();
    report.push_metric("synergy_score", MetricValue::Integer(profile.synergy_score.into()));
    report.push_text("knockout_rationale", profile.rationale);
    report.push_text("synergy_context", synergy_context(selection));
    report.push_text(
        "synergy_failure_modes",
        failure_modes(selection)
            .iter()
            .map(|m| format!("- {m}"))
            .collect::<Vec<_>>()
            .join("\n"),
    );
    report.push_dataset(synergy_comparison(target));

    debug!(
        knockout_target = target.slug(),
        synergy_score = profile.synergy_score,
        "assembled crispr synergy section"
    );
    report
}
