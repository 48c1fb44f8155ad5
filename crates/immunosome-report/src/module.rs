use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four panels of the framework. Each one owns a subset of the report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FrameworkModule {
    ImmunosomeBuilder,
    CrisprSynergy,
    DarkProteomeExplorer,
    MolecularValidation,
}

impl FrameworkModule {
    pub const ALL: [FrameworkModule; 4] = [
        FrameworkModule::ImmunosomeBuilder,
        FrameworkModule::CrisprSynergy,
        FrameworkModule::DarkProteomeExplorer,
        FrameworkModule::MolecularValidation,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            FrameworkModule::ImmunosomeBuilder => "immunosome-builder",
            FrameworkModule::CrisprSynergy => "crispr-synergy",
            FrameworkModule::DarkProteomeExplorer => "dark-proteome-explorer",
            FrameworkModule::MolecularValidation => "molecular-validation",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FrameworkModule::ImmunosomeBuilder => "Immunosome Builder",
            FrameworkModule::CrisprSynergy => "CRISPR Synergy",
            FrameworkModule::DarkProteomeExplorer => "Dark Proteome Explorer",
            FrameworkModule::MolecularValidation => "Molecular Validation",
        }
    }
}

impl fmt::Display for FrameworkModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FrameworkModule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FrameworkModule::ALL
            .into_iter()
            .find(|m| m.slug().eq_ignore_ascii_case(wanted) || m.title().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown framework module: {s:?}"))
    }
}
