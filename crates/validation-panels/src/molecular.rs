use immunosome_core::lookup::resolve_ligand;
use immunosome_core::report::{Cell, Column, ColumnKind, Dataset, Report};
use immunosome_core::selection::{SelectionOption, SelectionState};
use tracing::debug;

/// Reference docking affinity for the native ligand, kcal/mol.
pub const NATIVE_CD40L_AFFINITY: f64 = -9.2;

const CD40_EXPRESSION_TPM: [(&str, i64); 3] =
    [("B-Cells", 180), ("DCs", 310), ("Macrophages", 95)];

fn ligand_affinity(selection: &SelectionState) -> Dataset {
    let ligand = selection.ligand();
    Dataset::new(
        "ligand_affinity",
        vec![
            Column::new("Ligand", ColumnKind::Text),
            Column::new("Affinity (kcal/mol)", ColumnKind::Real),
        ],
    )
    .with_row(vec![
        Cell::text(ligand.label()),
        Cell::Real(resolve_ligand(ligand).affinity_kcal_per_mol),
    ])
    .and_then(|d| {
        d.with_row(vec![
            Cell::text("Native CD40L"),
            Cell::Real(NATIVE_CD40L_AFFINITY),
        ])
    })
    .expect("affinity rows match their columns")
}

fn cd40_expression() -> Dataset {
    let mut dataset = Dataset::new(
        "cd40_expression",
        vec![
            Column::new("Cell Type", ColumnKind::Text),
            Column::new("TPM", ColumnKind::Integer),
        ],
    );
    for (cell_type, tpm) in CD40_EXPRESSION_TPM {
        dataset
            .push_row(vec![Cell::text(cell_type), Cell::Integer(tpm)])
            .expect("expression rows match their columns");
    }
    dataset
}

pub fn molecular_validation_section(selection: &SelectionState) -> Report {
    let mut report = Report::default();
    report.push_text(
        "ligand_modality",
        resolve_ligand(selection.ligand()).modality,
    );
    report.push_dataset(ligand_affinity(selection));
    report.push_dataset(cd40_expression());
    debug!(ligand = selection.ligand().slug(), "assembled molecular validation section");
    report
}
