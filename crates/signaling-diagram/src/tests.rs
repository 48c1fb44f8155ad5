use crate::{build_diagram, NODE_IDS};
use immunosome_core::{
    DeliveryMethod, KnockoutTarget, Ligand, NodeCategory, Scaffold, SelectionOption,
    SelectionState,
};
use rand::seq::SliceRandom;

fn random_selection(rng: &mut impl rand::Rng) -> SelectionState {
    SelectionState::new(
        *Scaffold::ALL.choose(rng).unwrap(),
        *Ligand::ALL.choose(rng).unwrap(),
        *KnockoutTarget::ALL.choose(rng).unwrap(),
        *DeliveryMethod::ALL.choose(rng).unwrap(),
    )
}

#[test]
fn diagram_is_idempotent() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let selection = random_selection(&mut rng);
        assert_eq!(build_diagram(&selection), build_diagram(&selection));
    }
}

#[test]
fn topology_is_fixed_across_selections() {
    let base = build_diagram(&SelectionState::new(
        Scaffold::Liposome,
        Ligand::Cd40l,
        KnockoutTarget::PdL1,
        DeliveryMethod::LnpEncapsulated,
    ));
    assert_eq!(base.node_ids(), NODE_IDS.to_vec());
    assert_eq!(
        base.edge_pairs(),
        vec![
            ("NP", "CD40"),
            ("CD40", "TRAF6"),
            ("TRAF6", "NFkB"),
            ("NFkB", "TCell"),
        ]
    );
    base.validate().unwrap();

    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let diagram = build_diagram(&random_selection(&mut rng));
        diagram.validate().unwrap();
        assert_eq!(diagram.node_ids(), base.node_ids());
        assert_eq!(diagram.edges, base.edges);

        // Everything except the vehicle and receptor labels is constant.
        for (node, reference) in diagram.nodes.iter().zip(&base.nodes) {
            assert_eq!(node.category, reference.category);
            assert_eq!(node.color, reference.color);
            if node.id != "NP" && node.id != "CD40" {
                assert_eq!(node.label, reference.label);
            }
        }
    }
}

#[test]
fn labels_follow_scaffold_and_ligand() {
    let selection = SelectionState::new(
        Scaffold::PlgaPolymer,
        Ligand::Cp870893,
        KnockoutTarget::Socs1,
        DeliveryMethod::ViralVector,
    );
    let diagram = build_diagram(&selection);
    assert_eq!(diagram.node("NP").unwrap().label, "Vehicle\n(PLGA Polymer)");
    assert_eq!(diagram.node("CD40").unwrap().label, "CD40\n(CP-870,893)");
    assert_eq!(diagram.node("NP").unwrap().category, NodeCategory::Vehicle);
    assert_eq!(diagram.node("TCell").unwrap().category, NodeCategory::Effector);

    let other = build_diagram(&SelectionState::new(
        Scaffold::PlgaPolymer,
        Ligand::Cp870893,
        KnockoutTarget::Il10,
        DeliveryMethod::ExVivo,
    ));
    assert_eq!(diagram, other);
}

#[test]
fn diagram_serializes_edge_annotations() {
    let diagram = build_diagram(&SelectionState::new(
        Scaffold::Exosome,
        Ligand::Selicrelumab,
        KnockoutTarget::Ctla4,
        DeliveryMethod::LnpEncapsulated,
    ));
    let value = serde_json::to_value(&diagram).unwrap();
    assert_eq!(value["edges"][0]["annotation"], "Scaffold-mediated receptor clustering");
    assert_eq!(value["nodes"][0]["shape"], "diamond");
    assert_eq!(value["nodes"][2]["size"], serde_json::Value::Null);
}
