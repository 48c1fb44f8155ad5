use immunosome_core::report::{Cell, Column, ColumnKind, Dataset, Report};

#[derive(Debug, Clone, Copy)]
pub struct DarkProteomeCandidate {
    pub protein: &'static str,
    pub domain: &'static str,
    pub af2_confidence: u8,
    /// 1 to 5.
    pub priority: u8,
}

pub const CANDIDATES: [DarkProteomeCandidate; 4] = [
    DarkProteomeCandidate {
        protein: "C1orf112",
        domain: "LRR",
        af2_confidence: 89,
        priority: 4,
    },
    DarkProteomeCandidate {
        protein: "FAM210A",
        domain: "Coiled-coil",
        af2_confidence: 45,
        priority: 2,
    },
    DarkProteomeCandidate {
        protein: "TMEM256",
        domain: "TM",
        af2_confidence: 92,
        priority: 5,
    },
    DarkProteomeCandidate {
        protein: "C19orf12",
        domain: "TNFR-like",
        af2_confidence: 81,
        priority: 4,
    },
];

/// Not parameterized by the selection; the candidate list is fixed.
pub fn dark_proteome_section() -> Report {
    let mut dataset = Dataset::new(
        "dark_proteome",
        vec![
            Column::new("Protein", ColumnKind::Text),
            Column::new("Domain", ColumnKind::Text),
            Column::new("AF2 Confidence", ColumnKind::Integer),
            Column::new("Priority", ColumnKind::Integer),
        ],
    );
    for c in CANDIDATES {
        dataset
            .push_row(vec![
                Cell::text(c.protein),
                Cell::text(c.domain),
                Cell::Integer(c.af2_confidence.into()),
                Cell::Integer(c.priority.into()),
            ])
            .expect("candidate rows match their columns");
    }

    let mut report = Report::default();
    report.push_text(
        "prioritization_note",
        "AlphaFold-guided prioritization: high-confidence candidates are proposed for functional validation within the CD40–TRAF signaling context.",
    );
    report.push_dataset(dataset);
    report
}
