use immunosome_core::lookup::synergy_score;
use immunosome_core::report::{Cell, Column, ColumnKind, Dataset};
use immunosome_core::selection::{KnockoutTarget, SelectionOption};

/// Illustrative baseline responses; not fitted to any experimental data.
pub const AGONIST_ONLY_RESPONSE: i64 = 40;
pub const KNOCKOUT_ONLY_RESPONSE: i64 = 25;

pub const COMPARISON_DATASET: &str = "synergy_comparison";

/// Three rows in fixed order: agonist only, the combined model, knockout only.
pub fn synergy_comparison(target: KnockoutTarget) -> Dataset {
    let rows = [
        ("Agonist Only".to_string(), AGONIST_ONLY_RESPONSE),
        (
            "Conditional Synergy Model".to_string(),
            i64::from(synergy_score(target)),
        ),
        (format!("{} KO Only", target.label()), KNOCKOUT_ONLY_RESPONSE),
    ];

    let mut dataset = Dataset::new(
        COMPARISON_DATASET,
        vec![
            Column::new("Condition", ColumnKind::Text),
            Column::new("Response", ColumnKind::Integer),
        ],
    );
    for (condition, response) in rows {
        dataset
            .push_row(vec![Cell::Text(condition), Cell::Integer(response)])
            .expect("comparison rows match their columns");
    }
    dataset
}
