use crate::selection::SelectionField;
use thiserror::Error;

/// Rejection of a raw user choice. Raised before anything is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("invalid selection for {field}: {value:?}")]
    InvalidSelection { field: SelectionField, value: String },
}

impl SelectionError {
    pub fn field(&self) -> SelectionField {
        match self {
            SelectionError::InvalidSelection { field, .. } => *field,
        }
    }
}

/// Lookup table completeness failures. These are start-up fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("{table} table has no entry for {key}")]
    MissingEntry { table: &'static str, key: String },
    #[error("{table} table has more than one entry for {key}")]
    DuplicateEntry { table: &'static str, key: String },
    #[error("synergy score {score} for {key} is outside 0..=100")]
    ScoreOutOfRange { key: String, score: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    #[error("edge {from} -> {to} references unknown node {missing}")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },
    #[error("duplicate node identifier {0}")]
    DuplicateNode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("dataset {dataset}: row has {got} cells, expected {expected}")]
    RaggedRow {
        dataset: String,
        expected: usize,
        got: usize,
    },
    #[error("dataset {dataset}: column {column} expects {expected} cells")]
    ColumnKindMismatch {
        dataset: String,
        column: String,
        expected: &'static str,
    },
}
