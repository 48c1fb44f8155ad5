use crate::error::DiagramError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    Vehicle,
    Receptor,
    Adaptor,
    Pathway,
    Effector,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NodeShape {
    Dot,
    Diamond,
    Star,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagramNode {
    pub id: String,
    pub label: String,
    pub category: NodeCategory,
    pub color: String,
    pub shape: NodeShape,
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagramEdge {
    pub source: String,
    pub target: String,
    pub annotation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiagramDescription {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

impl DiagramDescription {
    pub fn node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    pub fn edge_pairs(&self) -> Vec<(&str, &str)> {
        self.edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect()
    }

    /// Checks that node identifiers are unique and every edge endpoint exists.
    pub fn validate(&self) -> Result<(), DiagramError> {
        let mut ids = BTreeSet::new();
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(DiagramError::DuplicateNode(node.id.clone()));
            }
        }
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(DiagramError::DanglingEdge {
                        from: edge.source.clone(),
                        to: edge.target.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
