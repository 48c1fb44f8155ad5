use crate::config::FrameworkConfig;
use chrono::{DateTime, Utc};
use immunosome_core::selection::{DeliveryMethod, KnockoutTarget, Ligand, Scaffold, SelectionOption};
use immunosome_metrics::ResolutionPass;
use immunosome_report::FrameworkModule;
use serde::Serialize;
use uuid::Uuid;

/// What the presentation layer receives for one interaction.
#[derive(Debug, Serialize)]
pub struct RenderEnvelope<'a> {
    pub pass_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub config: &'a FrameworkConfig,
    #[serde(flatten)]
    pub pass: &'a ResolutionPass,
}

impl<'a> RenderEnvelope<'a> {
    pub fn new(config: &'a FrameworkConfig, pass: &'a ResolutionPass) -> Self {
        Self {
            pass_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            config,
            pass,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OptionsListing {
    pub scaffolds: Vec<&'static str>,
    pub ligands: Vec<&'static str>,
    pub knockout_targets: Vec<&'static str>,
    pub delivery_methods: Vec<&'static str>,
    pub modules: Vec<&'static str>,
}

impl OptionsListing {
    pub fn collect() -> Self {
        Self {
            scaffolds: Scaffold::labels(),
            ligands: Ligand::labels(),
            knockout_targets: KnockoutTarget::labels(),
            delivery_methods: DeliveryMethod::labels(),
            modules: FrameworkModule::ALL.iter().map(|m| m.title()).collect(),
        }
    }
}
