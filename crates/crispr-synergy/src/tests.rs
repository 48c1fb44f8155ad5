use crate::{
    crispr_synergy_section, failure_modes, synergy_comparison, synergy_context,
    AGONIST_ONLY_RESPONSE, COMPARISON_DATASET, KNOCKOUT_ONLY_RESPONSE,
};
use immunosome_core::{
    synergy_score, DeliveryMethod, KnockoutTarget, Ligand, Scaffold, SelectionOption,
    SelectionState,
};
use rand::seq::SliceRandom;

#[test]
fn comparison_middle_row_tracks_synergy_score() {
    for target in KnockoutTarget::ALL {
        let score = synergy_score(*target);
        assert!(score <= 100);

        let dataset = synergy_comparison(*target);
        let responses: Vec<i64> = dataset
            .column("Response")
            .unwrap()
            .into_iter()
            .map(|c| c.as_integer().unwrap())
            .collect();
        assert_eq!(
            responses,
            vec![AGONIST_ONLY_RESPONSE, i64::from(score), KNOCKOUT_ONLY_RESPONSE]
        );
        assert_eq!(responses[0], 40);
        assert_eq!(responses[2], 25);
    }
}

#[test]
fn comparison_conditions_name_the_target() {
    let dataset = synergy_comparison(KnockoutTarget::Ctla4);
    let conditions: Vec<&str> = dataset
        .column("Condition")
        .unwrap()
        .into_iter()
        .map(|c| c.as_text().unwrap())
        .collect();
    assert_eq!(
        conditions,
        vec!["Agonist Only", "Conditional Synergy Model", "CTLA-4 KO Only"]
    );
    assert_eq!(dataset.name(), COMPARISON_DATASET);
}

#[test]
fn context_and_failure_modes_mention_selection() {
    let selection = SelectionState::new(
        Scaffold::Exosome,
        Ligand::Dacetuzumab,
        KnockoutTarget::PdL1,
        DeliveryMethod::ViralVector,
    );
    assert_eq!(
        synergy_context(&selection),
        "Conditional synergy between Dacetuzumab activation and PD-L1 knockout via Viral Vector delivery."
    );

    let modes = failure_modes(&selection);
    assert_eq!(modes.len(), 4);
    assert!(modes[0].starts_with("PD-L1 KO"));
    assert!(modes[2].contains("Viral Vector"));
}

#[test]
fn section_is_idempotent_for_random_selections() {
    let mut rng = rand::thread_rng();
    for _ in 0..30 {
        let selection = SelectionState::new(
            *Scaffold::ALL.choose(&mut rng).unwrap(),
            *Ligand::ALL.choose(&mut rng).unwrap(),
            *KnockoutTarget::ALL.choose(&mut rng).unwrap(),
            *DeliveryMethod::ALL.choose(&mut rng).unwrap(),
        );
        let first = crispr_synergy_section(&selection);
        assert_eq!(first, crispr_synergy_section(&selection));
        assert_eq!(
            first.metric("synergy_score").and_then(|m| m.as_integer()),
            Some(i64::from(synergy_score(selection.knockout_target())))
        );
    }
}
