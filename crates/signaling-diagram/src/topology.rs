//! The CD40 signaling axis, drawn as a fixed chain from delivery vehicle to
//! T-cell response. Only the vehicle and receptor labels follow the selection.

use immunosome_core::diagram::{
    DiagramDescription, DiagramEdge, DiagramNode, NodeCategory, NodeShape,
};
use immunosome_core::selection::{SelectionOption, SelectionState};
use tracing::debug;

pub const NODE_IDS: [&str; 5] = ["NP", "CD40", "TRAF6", "NFkB", "TCell"];

struct NodeSpec {
    id: &'static str,
    category: NodeCategory,
    color: &'static str,
    shape: NodeShape,
    size: Option<u32>,
}

const NODES: [NodeSpec; 5] = [
    NodeSpec {
        id: "NP",
        category: NodeCategory::Vehicle,
        color: "#FF4B4B",
        shape: NodeShape::Diamond,
        size: Some(30),
    },
    NodeSpec {
        id: "CD40",
        category: NodeCategory::Receptor,
        color: "#1f77b4",
        shape: NodeShape::Dot,
        size: Some(25),
    },
    NodeSpec {
        id: "TRAF6",
        category: NodeCategory::Adaptor,
        color: "#ff7f0e",
        shape: NodeShape::Dot,
        size: None,
    },
    NodeSpec {
        id: "NFkB",
        category: NodeCategory::Pathway,
        color: "#2ca02c",
        shape: NodeShape::Dot,
        size: None,
    },
    NodeSpec {
        id: "TCell",
        category: NodeCategory::Effector,
        color: "#9467bd",
        shape: NodeShape::Star,
        size: Some(30),
    },
];

const EDGES: [(&str, &str, &str); 4] = [
    ("NP", "CD40", "Scaffold-mediated receptor clustering"),
    ("CD40", "TRAF6", "Adaptor recruitment"),
    ("TRAF6", "NFkB", "Signal amplification"),
    ("NFkB", "TCell", "Effector activation"),
];

fn label_for(id: &str, selection: &SelectionState) -> String {
    match id {
        "NP" => format!("Vehicle\n({})", selection.scaffold().label()),
        "CD40" => format!("CD40\n({})", selection.ligand().label()),
        "TRAF6" => "TRAF6".to_string(),
        "NFkB" => "NF-κB Pathway".to_string(),
        "TCell" => "T-Cell Response".to_string(),
        other => other.to_string(),
    }
}

pub fn build_diagram(selection: &SelectionState) -> DiagramDescription {
    let nodes = NODES
        .iter()
        .map(|spec| DiagramNode {
            id: spec.id.to_string(),
            label: label_for(spec.id, selection),
            category: spec.category,
            color: spec.color.to_string(),
            shape: spec.shape,
            size: spec.size,
        })
        .collect();

    let edges = EDGES
        .iter()
        .map(|(source, target, annotation)| DiagramEdge {
            source: source.to_string(),
            target: target.to_string(),
            annotation: Some(annotation.to_string()),
        })
        .collect();

    debug!(
        scaffold = selection.scaffold().slug(),
        ligand = selection.ligand().slug(),
        "built signaling diagram"
    );

    DiagramDescription { nodes, edges }
}
