use crate::builder::immunosome_builder_section;
use crate::module::FrameworkModule;
use crispr_synergy::crispr_synergy_section;
use immunosome_core::report::Report;
use immunosome_core::selection::{SelectionOption, SelectionState};
use tracing::debug;
use validation_panels::{dark_proteome_section, molecular_validation_section};

pub fn build_module_report(selection: &SelectionState, module: FrameworkModule) -> Report {
    match module {
        FrameworkModule::ImmunosomeBuilder => immunosome_builder_section(selection),
        FrameworkModule::CrisprSynergy => crispr_synergy_section(selection),
        FrameworkModule::DarkProteomeExplorer => dark_proteome_section(),
        FrameworkModule::MolecularValidation => molecular_validation_section(selection),
    }
}

/// All four module sections, in panel order.
pub fn build_report(selection: &SelectionState) -> Report {
    let mut report = Report::default();
    for module in FrameworkModule::ALL {
        report.extend(build_module_report(selection, module));
    }
    debug!(
        scaffold = selection.scaffold().slug(),
        ligand = selection.ligand().slug(),
        knockout_target = selection.knockout_target().slug(),
        delivery_method = selection.delivery_method().slug(),
        metrics = report.metrics.len(),
        datasets = report.datasets.len(),
        "assembled report"
    );
    report
}
