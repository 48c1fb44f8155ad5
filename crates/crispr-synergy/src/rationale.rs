use immunosome_core::lookup::resolve_delivery;
use immunosome_core::selection::{SelectionOption, SelectionState};

pub fn synergy_context(selection: &SelectionState) -> String {
    format!(
        "Conditional synergy between {} activation and {} knockout via {} delivery.",
        selection.ligand().label(),
        selection.knockout_target().label(),
        selection.delivery_method().label(),
    )
}

pub fn failure_modes(selection: &SelectionState) -> Vec<String> {
    let target = selection.knockout_target().label();
    let delivery = selection.delivery_method();
    vec![
        format!("{target} KO may induce compensatory inhibitory pathways"),
        "Excessive immune activation may lead to non-specific T-cell responses".to_string(),
        format!(
            "Delivery dependence ({}, {}) may limit editing efficiency or specificity",
            delivery.label(),
            resolve_delivery(delivery).editing_route,
        ),
        "Context dependence: synergy is expected only under active CD40 signaling regimes"
            .to_string(),
    ]
}
