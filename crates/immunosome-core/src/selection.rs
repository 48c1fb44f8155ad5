use crate::error::SelectionError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SelectionField {
    Scaffold,
    Ligand,
    KnockoutTarget,
    DeliveryMethod,
}

impl SelectionField {
    pub fn as_str(self) -> &'static str {
        match self {
            SelectionField::Scaffold => "scaffold",
            SelectionField::Ligand => "ligand",
            SelectionField::KnockoutTarget => "knockout_target",
            SelectionField::DeliveryMethod => "delivery_method",
        }
    }
}

impl fmt::Display for SelectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closed set of choices offered to the user for one selection field.
///
/// `ALL` lists every member in display order. Lookup tables are checked
/// against it when they are built.
pub trait SelectionOption: Copy + Ord + fmt::Debug + 'static {
    const FIELD: SelectionField;
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
    fn slug(self) -> &'static str;

    fn parse(raw: &str) -> Result<Self, SelectionError> {
        let wanted = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|o| o.label().eq_ignore_ascii_case(wanted) || o.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SelectionError::InvalidSelection {
                field: Self::FIELD,
                value: raw.to_string(),
            })
    }

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|o| o.label()).collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scaffold {
    #[serde(rename = "liposome")]
    Liposome,
    #[serde(rename = "exosome")]
    Exosome,
    #[serde(rename = "plga-polymer")]
    PlgaPolymer,
    #[serde(rename = "gold-np")]
    GoldNp,
}

impl SelectionOption for Scaffold {
    const FIELD: SelectionField = SelectionField::Scaffold;
    const ALL: &'static [Self] = &[
        Scaffold::Liposome,
        Scaffold::Exosome,
        Scaffold::PlgaPolymer,
        Scaffold::GoldNp,
    ];

    fn label(self) -> &'static str {
        match self {
            Scaffold::Liposome => "Liposome",
            Scaffold::Exosome => "Exosome",
            Scaffold::PlgaPolymer => "PLGA Polymer",
            Scaffold::GoldNp => "Gold NP",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Scaffold::Liposome => "liposome",
            Scaffold::Exosome => "exosome",
            Scaffold::PlgaPolymer => "plga-polymer",
            Scaffold::GoldNp => "gold-np",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ligand {
    #[serde(rename = "cd40l")]
    Cd40l,
    #[serde(rename = "selicrelumab")]
    Selicrelumab,
    #[serde(rename = "cp-870893")]
    Cp870893,
    #[serde(rename = "dacetuzumab")]
    Dacetuzumab,
}

impl SelectionOption for Ligand {
    const FIELD: SelectionField = SelectionField::Ligand;
    const ALL: &'static [Self] = &[
        Ligand::Cd40l,
        Ligand::Selicrelumab,
        Ligand::Cp870893,
        Ligand::Dacetuzumab,
    ];

    fn label(self) -> &'static str {
        match self {
            Ligand::Cd40l => "CD40L (Native)",
            Ligand::Selicrelumab => "Selicrelumab",
            Ligand::Cp870893 => "CP-870,893",
            Ligand::Dacetuzumab => "Dacetuzumab",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Ligand::Cd40l => "cd40l",
            Ligand::Selicrelumab => "selicrelumab",
            Ligand::Cp870893 => "cp-870893",
            Ligand::Dacetuzumab => "dacetuzumab",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KnockoutTarget {
    #[serde(rename = "pd-l1")]
    PdL1,
    #[serde(rename = "ctla-4")]
    Ctla4,
    #[serde(rename = "socs1")]
    Socs1,
    #[serde(rename = "il-10")]
    Il10,
}

impl SelectionOption for KnockoutTarget {
    const FIELD: SelectionField = SelectionField::KnockoutTarget;
    const ALL: &'static [Self] = &[
        KnockoutTarget::PdL1,
        KnockoutTarget::Ctla4,
        KnockoutTarget::Socs1,
        KnockoutTarget::Il10,
    ];

    fn label(self) -> &'static str {
        match self {
            KnockoutTarget::PdL1 => "PD-L1",
            KnockoutTarget::Ctla4 => "CTLA-4",
            KnockoutTarget::Socs1 => "SOCS1",
            KnockoutTarget::Il10 => "IL-10",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            KnockoutTarget::PdL1 => "pd-l1",
            KnockoutTarget::Ctla4 => "ctla-4",
            KnockoutTarget::Socs1 => "socs1",
            KnockoutTarget::Il10 => "il-10",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeliveryMethod {
    #[serde(rename = "lnp-encapsulated")]
    LnpEncapsulated,
    #[serde(rename = "viral-vector")]
    ViralVector,
    #[serde(rename = "ex-vivo")]
    ExVivo,
}

impl SelectionOption for DeliveryMethod {
    const FIELD: SelectionField = SelectionField::DeliveryMethod;
    const ALL: &'static [Self] = &[
        DeliveryMethod::LnpEncapsulated,
        DeliveryMethod::ViralVector,
        DeliveryMethod::ExVivo,
    ];

    fn label(self) -> &'static str {
        match self {
            DeliveryMethod::LnpEncapsulated => "LNP-Encapsulated",
            DeliveryMethod::ViralVector => "Viral Vector",
            DeliveryMethod::ExVivo => "Ex Vivo",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            DeliveryMethod::LnpEncapsulated => "lnp-encapsulated",
            DeliveryMethod::ViralVector => "viral-vector",
            DeliveryMethod::ExVivo => "ex-vivo",
        }
    }
}

/// Raw, unvalidated choices as collected from input controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSelection {
    pub scaffold: String,
    pub ligand: String,
    pub knockout_target: String,
    pub delivery_method: String,
}

/// One resolution pass worth of user choices. Never mutated; a new value is
/// built for every interaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SelectionState {
    scaffold: Scaffold,
    ligand: Ligand,
    knockout_target: KnockoutTarget,
    delivery_method: DeliveryMethod,
}

impl SelectionState {
    pub fn new(
        scaffold: Scaffold,
        ligand: Ligand,
        knockout_target: KnockoutTarget,
        delivery_method: DeliveryMethod,
    ) -> Self {
        Self {
            scaffold,
            ligand,
            knockout_target,
            delivery_method,
        }
    }

    pub fn parse(
        scaffold: &str,
        ligand: &str,
        knockout_target: &str,
        delivery_method: &str,
    ) -> Result<Self, SelectionError> {
        Ok(Self {
            scaffold: Scaffold::parse(scaffold)?,
            ligand: Ligand::parse(ligand)?,
            knockout_target: KnockoutTarget::parse(knockout_target)?,
            delivery_method: DeliveryMethod::parse(delivery_method)?,
        })
    }

    pub fn scaffold(&self) -> Scaffold {
        self.scaffold
    }

    pub fn ligand(&self) -> Ligand {
        self.ligand
    }

    pub fn knockout_target(&self) -> KnockoutTarget {
        self.knockout_target
    }

    pub fn delivery_method(&self) -> DeliveryMethod {
        self.delivery_method
    }
}

impl TryFrom<&RawSelection> for SelectionState {
    type Error = SelectionError;

    fn try_from(raw: &RawSelection) -> Result<Self, Self::Error> {
        SelectionState::parse(
            &raw.scaffold,
            &raw.ligand,
            &raw.knockout_target,
            &raw.delivery_method,
        )
    }
}

impl TryFrom<RawSelection> for SelectionState {
    type Error = SelectionError;

    fn try_from(raw: RawSelection) -> Result<Self, Self::Error> {
        SelectionState::try_from(&raw)
    }
}
