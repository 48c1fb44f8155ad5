//! Command-line rendering adapter: resolves a selection and prints the
//! diagram and report as JSON for whatever front end draws them.

mod cli;
mod config;
mod logging;
mod render;
#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, ResolveArgs};
use config::FrameworkConfig;
use immunosome_core::lookup::LookupTables;
use immunosome_metrics::{resolve, ResolutionMetrics};
use render::{OptionsListing, RenderEnvelope};
use std::io::{self, Write};
use tracing::info;

fn run_resolve(args: &ResolveArgs, out: &mut impl Write) -> Result<()> {
    let config = match &args.config {
        Some(path) => FrameworkConfig::load(path)?,
        None => FrameworkConfig::default(),
    };
    let metrics = ResolutionMetrics::new().context("registering resolution metrics")?;

    let pass = resolve(&metrics, &args.raw_selection(), args.module)?;
    let envelope = RenderEnvelope::new(&config, &pass);
    info!(
        pass_id = %envelope.pass_id,
        module = args.module.map_or("all", |m| m.slug()),
        "resolved selection"
    );

    serde_json::to_writer_pretty(&mut *out, &envelope).context("writing render envelope")?;
    writeln!(out)?;
    if args.metrics {
        write!(out, "{}", metrics.encode_text()?)?;
    }
    Ok(())
}

fn run_options(out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &OptionsListing::collect())
        .context("writing options listing")?;
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_json);

    LookupTables::init().context("lookup tables failed completeness check")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Resolve(args) => run_resolve(args, &mut out),
        Command::Options => run_options(&mut out),
    }
}
