use crate::{resolve, ResolutionMetrics};
use immunosome_core::{RawSelection, SelectionError, SelectionField};
use immunosome_report::FrameworkModule;

fn raw(scaffold: &str, ligand: &str, knockout: &str, delivery: &str) -> RawSelection {
    RawSelection {
        scaffold: scaffold.into(),
        ligand: ligand.into(),
        knockout_target: knockout.into(),
        delivery_method: delivery.into(),
    }
}

#[test]
fn resolve_counts_passes_and_scores() {
    let metrics = ResolutionMetrics::new().unwrap();
    let pass = resolve(
        &metrics,
        &raw("PLGA Polymer", "CD40L", "SOCS1", "LNP-Encapsulated"),
        None,
    )
    .unwrap();
    assert_eq!(pass.diagram.nodes.len(), 5);
    assert!(pass.report.dataset("synergy_comparison").is_some());

    resolve(
        &metrics,
        &raw("Exosome", "Selicrelumab", "IL-10", "Ex Vivo"),
        Some(FrameworkModule::CrisprSynergy),
    )
    .unwrap();

    assert_eq!(
        metrics.resolutions_total.with_label_values(&["all"]).get(),
        1
    );
    assert_eq!(
        metrics
            .resolutions_total
            .with_label_values(&["crispr-synergy"])
            .get(),
        1
    );
    assert_eq!(metrics.synergy_score.with_label_values(&["socs1"]).get(), 94);
    assert_eq!(metrics.synergy_score.with_label_values(&["il-10"]).get(), 70);
}

#[test]
fn invalid_selection_builds_nothing_and_is_counted() {
    let metrics = ResolutionMetrics::new().unwrap();
    let err = resolve(
        &metrics,
        &raw("Exosome", "Selicrelumab", "BRCA1", "Ex Vivo"),
        None,
    )
    .unwrap_err();
    assert_eq!(
        err,
        SelectionError::InvalidSelection {
            field: SelectionField::KnockoutTarget,
            value: "BRCA1".into(),
        }
    );
    assert_eq!(
        metrics
            .invalid_selections_total
            .with_label_values(&["knockout_target"])
            .get(),
        1
    );
    assert_eq!(metrics.resolutions_total.with_label_values(&["all"]).get(), 0);
}

#[test]
fn encoded_text_lists_collectors() {
    let metrics = ResolutionMetrics::new().unwrap();
    resolve(
        &metrics,
        &raw("Gold NP", "Dacetuzumab", "CTLA-4", "Viral Vector"),
        Some(FrameworkModule::ImmunosomeBuilder),
    )
    .unwrap();
    let text = metrics.encode_text().unwrap();
    assert!(text.contains("immunosome_resolutions_total{module=\"immunosome-builder\"} 1"));
    assert!(text.contains("immunosome_synergy_score{knockout_target=\"ctla-4\"} 78"));
}
