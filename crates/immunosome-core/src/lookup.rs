//! Read-only lookup tables keyed by the selection enums.
//!
//! The tables are built once, on first use, and checked against every
//! enum's `ALL` list. A table that misses a member, lists one twice, or
//! carries a synergy score above 100 never becomes visible to callers:
//! [`LookupTables::init`] reports the failure and [`LookupTables::global`]
//! refuses to hand out a partial table.

use crate::error::TableError;
use crate::selection::{DeliveryMethod, KnockoutTarget, Ligand, Scaffold, SelectionOption};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{error, info};

pub const MAX_SYNERGY_SCORE: u8 = 100;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScaffoldProfile {
    pub clustering: &'static str,
    pub release: &'static str,
    pub risk: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LigandProfile {
    pub modality: &'static str,
    pub affinity_kcal_per_mol: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KnockoutProfile {
    pub rationale: &'static str,
    pub synergy_score: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DeliveryProfile {
    pub editing_route: &'static str,
}

#[derive(Debug, Clone)]
pub struct LookupTables {
    scaffolds: BTreeMap<Scaffold, ScaffoldProfile>,
    ligands: BTreeMap<Ligand, LigandProfile>,
    knockouts: BTreeMap<KnockoutTarget, KnockoutProfile>,
    deliveries: BTreeMap<DeliveryMethod, DeliveryProfile>,
}

static TABLES: Lazy<Result<LookupTables, TableError>> = Lazy::new(|| {
    let tables = LookupTables::from_entries(
        scaffold_entries(),
        ligand_entries(),
        knockout_entries(),
        delivery_entries(),
    );
    match &tables {
        Ok(t) => info!(
            scaffolds = t.scaffolds.len(),
            ligands = t.ligands.len(),
            knockouts = t.knockouts.len(),
            deliveries = t.deliveries.len(),
            "lookup tables initialized"
        ),
        Err(e) => error!(error = %e, "lookup tables failed completeness check"),
    }
    tables
});

impl LookupTables {
    /// Builds a table set and runs the completeness check over all four enums.
    pub fn from_entries(
        scaffolds: Vec<(Scaffold, ScaffoldProfile)>,
        ligands: Vec<(Ligand, LigandProfile)>,
        knockouts: Vec<(KnockoutTarget, KnockoutProfile)>,
        deliveries: Vec<(DeliveryMethod, DeliveryProfile)>,
    ) -> Result<Self, TableError> {
        let knockouts = index("knockout", knockouts)?;
        if let Some((target, profile)) = knockouts
            .iter()
            .find(|(_, p)| p.synergy_score > MAX_SYNERGY_SCORE)
        {
            return Err(TableError::ScoreOutOfRange {
                key: target.label().to_string(),
                score: profile.synergy_score,
            });
        }

        Ok(Self {
            scaffolds: index("scaffold", scaffolds)?,
            ligands: index("ligand", ligands)?,
            knockouts,
            deliveries: index("delivery", deliveries)?,
        })
    }

    /// Forces initialization of the process-wide tables. Call at start-up so
    /// an incomplete table aborts the process before any request is served.
    pub fn init() -> Result<&'static LookupTables, TableError> {
        TABLES.as_ref().map_err(Clone::clone)
    }

    pub fn global() -> &'static LookupTables {
        match TABLES.as_ref() {
            Ok(tables) => tables,
            Err(e) => panic!("lookup tables failed completeness check: {e}"),
        }
    }

    pub fn scaffold(&self, scaffold: Scaffold) -> &ScaffoldProfile {
        &self.scaffolds[&scaffold]
    }

    pub fn ligand(&self, ligand: Ligand) -> &LigandProfile {
        &self.ligands[&ligand]
    }

    pub fn knockout(&self, target: KnockoutTarget) -> &KnockoutProfile {
        &self.knockouts[&target]
    }

    pub fn delivery(&self, method: DeliveryMethod) -> &DeliveryProfile {
        &self.deliveries[&method]
    }
}

fn index<K: SelectionOption, V>(
    table: &'static str,
    entries: Vec<(K, V)>,
) -> Result<BTreeMap<K, V>, TableError> {
    let mut map = BTreeMap::new();
    for (key, value) in entries {
        if map.insert(key, value).is_some() {
            return Err(TableError::DuplicateEntry {
                table,
                key: key.label().to_string(),
            });
        }
    }
    if let Some(missing) = K::ALL.iter().find(|k| !map.contains_key(*k)) {
        return Err(TableError::MissingEntry {
            table,
            key: missing.label().to_string(),
        });
    }
    Ok(map)
}

pub fn resolve_scaffold(scaffold: Scaffold) -> &'static ScaffoldProfile {
    LookupTables::global().scaffold(scaffold)
}

pub fn resolve_ligand(ligand: Ligand) -> &'static LigandProfile {
    LookupTables::global().ligand(ligand)
}

pub fn resolve_knockout(target: KnockoutTarget) -> &'static KnockoutProfile {
    LookupTables::global().knockout(target)
}

pub fn resolve_delivery(method: DeliveryMethod) -> &'static DeliveryProfile {
    LookupTables::global().delivery(method)
}

pub fn synergy_score(target: KnockoutTarget) -> u8 {
    resolve_knockout(target).synergy_score
}

pub(crate) fn scaffold_entries() -> Vec<(Scaffold, ScaffoldProfile)> {
    vec![
        (
            Scaffold::Liposome,
            ScaffoldProfile {
                clustering: "Moderate",
                release: "Fast",
                risk: "Transient signaling",
            },
        ),
        (
            Scaffold::Exosome,
            ScaffoldProfile {
                clustering: "High",
                release: "Physiological",
                risk: "Heterogeneous uptake",
            },
        ),
        (
            Scaffold::PlgaPolymer,
            ScaffoldProfile {
                clustering: "High",
                release: "Sustained",
                risk: "NF-κB overactivation / exhaustion",
            },
        ),
        (
            Scaffold::GoldNp,
            ScaffoldProfile {
                clustering: "Very High",
                release: "None",
                risk: "Non-physiological signaling",
            },
        ),
    ]
}

// Affinities are illustrative docking placeholders, identical per ligand.
pub(crate) fn ligand_entries() -> Vec<(Ligand, LigandProfile)> {
    vec![
        (
            Ligand::Cd40l,
            LigandProfile {
                modality: "Native trimeric ligand",
                affinity_kcal_per_mol: -11.4,
            },
        ),
        (
            Ligand::Selicrelumab,
            LigandProfile {
                modality: "Agonist monoclonal antibody",
                affinity_kcal_per_mol: -11.4,
            },
        ),
        (
            Ligand::Cp870893,
            LigandProfile {
                modality: "Agonist monoclonal antibody",
                affinity_kcal_per_mol: -11.4,
            },
        ),
        (
            Ligand::Dacetuzumab,
            LigandProfile {
                modality: "Partial agonist monoclonal antibody",
                affinity_kcal_per_mol: -11.4,
            },
        ),
    ]
}

pub(crate) fn knockout_entries() -> Vec<(KnockoutTarget, KnockoutProfile)> {
    vec![
        (
            KnockoutTarget::PdL1,
            KnockoutProfile {
                rationale: "PD-L1 deletion removes inhibitory feedback on T-cells activated downstream of CD40-mediated antigen presentation, testing whether CD40 signaling is functionally constrained by immune checkpoints.",
                synergy_score: 85,
            },
        ),
        (
            KnockoutTarget::Ctla4,
            KnockoutProfile {
                rationale: "CTLA-4 knockout disrupts early co-inhibitory signaling during T-cell priming, amplifying CD40-driven co-stimulation at the antigen-presenting cell interface.",
                synergy_score: 78,
            },
        ),
        (
            KnockoutTarget::Socs1,
            KnockoutProfile {
                rationale: "SOCS1 knockout releases negative regulation of cytokine and NF-κB signaling, probing the persistence of CD40–TRAF6 signal amplification.",
                synergy_score: 94,
            },
        ),
        (
            KnockoutTarget::Il10,
            KnockoutProfile {
                rationale: "IL-10 deletion limits anti-inflammatory feedback from antigen-presenting cells following CD40 activation, testing immune resolution boundaries.",
                synergy_score: 70,
            },
        ),
    ]
}

pub(crate) fn delivery_entries() -> Vec<(DeliveryMethod, DeliveryProfile)> {
    vec![
        (
            DeliveryMethod::LnpEncapsulated,
            DeliveryProfile {
                editing_route: "transient in vivo exposure",
            },
        ),
        (
            DeliveryMethod::ViralVector,
            DeliveryProfile {
                editing_route: "persistent in vivo expression",
            },
        ),
        (
            DeliveryMethod::ExVivo,
            DeliveryProfile {
                editing_route: "edited cells reinfused",
            },
        ),
    ]
}
