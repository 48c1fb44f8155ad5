use crate::error::DatasetError;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum MetricValue {
    Integer(i64),
    Real(f64),
    Label(String),
}

impl MetricValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            MetricValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            MetricValue::Label(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Metric {
    pub name: String,
    pub value: MetricValue,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TextField {
    pub name: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Text,
    Integer,
    Real,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKind::Text => "text",
            ColumnKind::Integer => "integer",
            ColumnKind::Real => "real",
        }
    }

    fn accepts(self, cell: &Cell) -> bool {
        matches!(
            (self, cell),
            (ColumnKind::Text, Cell::Text(_))
                | (ColumnKind::Integer, Cell::Integer(_))
                | (ColumnKind::Real, Cell::Real(_))
        )
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Real(f64),
}

impl Cell {
    pub fn text(v: impl Into<String>) -> Self {
        Cell::Text(v.into())
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Cell::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Cell::Real(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

/// A rectangular table. Rows are only accepted when they have one cell per
/// column and each cell matches its column's kind.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dataset {
    name: String,
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), DatasetError> {
        if row.len() != self.columns.len() {
            return Err(DatasetError::RaggedRow {
                dataset: self.name.clone(),
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        if let Some(column) = self
            .columns
            .iter()
            .zip(&row)
            .find(|(c, cell)| !c.kind.accepts(cell))
            .map(|(c, _)| c)
        {
            return Err(DatasetError::ColumnKindMismatch {
                dataset: self.name.clone(),
                column: column.name.clone(),
                expected: column.kind.as_str(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn with_row(mut self, row: Vec<Cell>) -> Result<Self, DatasetError> {
        self.push_row(row)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let idx = self.columns.iter().position(|c| c.name == name)?;
        Some(self.rows.iter().map(|r| &r[idx]).collect())
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Report {
    pub metrics: Vec<Metric>,
    pub texts: Vec<TextField>,
    pub datasets: Vec<Dataset>,
}

impl Report {
    pub fn push_metric(&mut self, name: impl Into<String>, value: MetricValue) {
        self.metrics.push(Metric {
            name: name.into(),
            value,
        });
    }

    pub fn push_text(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.texts.push(TextField {
            name: name.into(),
            body: body.into(),
        });
    }

    pub fn push_dataset(&mut self, dataset: Dataset) {
        self.datasets.push(dataset);
    }

    /// Appends every section of `other` after this report's own.
    pub fn extend(&mut self, other: Report) {
        self.metrics.extend(other.metrics);
        self.texts.extend(other.texts);
        self.datasets.extend(other.datasets);
    }

    pub fn metric(&self, name: &str) -> Option<&MetricValue> {
        self.metrics.iter().find(|m| m.name == name).map(|m| &m.value)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.body.as_str())
    }

    pub fn dataset(&self, name: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.name == name)
    }
}
