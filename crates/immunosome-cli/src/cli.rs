use clap::{Args, Parser, Subcommand};
use immunosome_core::selection::RawSelection;
use immunosome_report::FrameworkModule;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "immunosome",
    version,
    about = "Resolve CD40 immunosome selections into diagram and report JSON"
)]
pub struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve one selection and print the render envelope.
    Resolve(ResolveArgs),
    /// List every accepted option for each selection field.
    Options,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[arg(long, default_value = "Liposome")]
    pub scaffold: String,

    #[arg(long, default_value = "CD40L (Native)")]
    pub ligand: String,

    #[arg(long = "knockout", default_value = "PD-L1")]
    pub knockout_target: String,

    #[arg(long = "delivery", default_value = "LNP-Encapsulated")]
    pub delivery_method: String,

    /// Restrict the report to one framework module.
    #[arg(long)]
    pub module: Option<FrameworkModule>,

    /// Presentation config (JSON).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Append the Prometheus exposition for this pass.
    #[arg(long)]
    pub metrics: bool,
}

impl ResolveArgs {
    pub fn raw_selection(&self) -> RawSelection {
        RawSelection {
            scaffold: self.scaffold.clone(),
            ligand: self.ligand.clone(),
            knockout_target: self.knockout_target.clone(),
            delivery_method: self.delivery_method.clone(),
        }
    }
}
