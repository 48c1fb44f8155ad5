use crate::cli::{Cli, Command};
use crate::config::{FrameworkConfig, PageLayout};
use crate::{run_options, run_resolve};
use clap::Parser;
use immunosome_report::FrameworkModule;
use std::io::Write;

fn resolve_args(argv: &[&str]) -> crate::cli::ResolveArgs {
    let cli = Cli::try_parse_from(argv).unwrap();
    match cli.command {
        Command::Resolve(args) => args,
        other => panic!("expected resolve, got {other:?}"),
    }
}

#[test]
fn resolve_defaults_to_first_options() {
    let args = resolve_args(&["immunosome", "resolve"]);
    let raw = args.raw_selection();
    assert_eq!(raw.scaffold, "Liposome");
    assert_eq!(raw.ligand, "CD40L (Native)");
    assert_eq!(raw.knockout_target, "PD-L1");
    assert_eq!(raw.delivery_method, "LNP-Encapsulated");
    assert!(args.module.is_none());
    assert!(!args.metrics);
}

#[test]
fn module_flag_parses() {
    let args = resolve_args(&["immunosome", "resolve", "--module", "crispr-synergy"]);
    assert_eq!(args.module, Some(FrameworkModule::CrisprSynergy));
    assert!(Cli::try_parse_from(["immunosome", "resolve", "--module", "tab5"]).is_err());
}

#[test]
fn resolve_prints_envelope_json() {
    let args = resolve_args(&[
        "immunosome",
        "resolve",
        "--scaffold",
        "PLGA Polymer",
        "--ligand",
        "CD40L",
        "--knockout",
        "SOCS1",
    ]);
    let mut out = Vec::new();
    run_resolve(&args, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert!(value["pass_id"].is_string());
    assert_eq!(value["config"]["page_title"], "CD40 Systems Biology Framework");
    assert_eq!(value["selection"]["scaffold"], "plga-polymer");
    assert_eq!(value["diagram"]["nodes"][0]["label"], "Vehicle\n(PLGA Polymer)");

    let datasets = value["report"]["datasets"].as_array().unwrap();
    let comparison = datasets
        .iter()
        .find(|d| d["name"] == "synergy_comparison")
        .unwrap();
    assert_eq!(comparison["rows"][1][1], 94);
}

#[test]
fn invalid_selection_is_an_error() {
    let args = resolve_args(&["immunosome", "resolve", "--delivery", "Electroporation"]);
    let mut out = Vec::new();
    let err = run_resolve(&args, &mut out).unwrap_err();
    assert!(err.to_string().contains("delivery_method"));
    assert!(out.is_empty());
}

#[test]
fn metrics_flag_appends_exposition() {
    let args = resolve_args(&["immunosome", "resolve", "--metrics"]);
    let mut out = Vec::new();
    run_resolve(&args, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("immunosome_resolutions_total{module=\"all\"} 1"));
}

#[test]
fn config_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"page_title": "CD40 Lab", "layout": "centered"}}"#).unwrap();

    let config = FrameworkConfig::load(file.path()).unwrap();
    assert_eq!(config.page_title, "CD40 Lab");
    assert_eq!(config.layout, PageLayout::Centered);
    assert_eq!(config.page_icon, FrameworkConfig::default().page_icon);

    let mut broken = tempfile::NamedTempFile::new().unwrap();
    write!(broken, "{{not json").unwrap();
    assert!(FrameworkConfig::load(broken.path()).is_err());
}

#[test]
fn options_listing_covers_every_field() {
    let mut out = Vec::new();
    run_options(&mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["scaffolds"].as_array().unwrap().len(), 4);
    assert_eq!(value["ligands"][2], "CP-870,893");
    assert_eq!(value["knockout_targets"].as_array().unwrap().len(), 4);
    assert_eq!(value["delivery_methods"].as_array().unwrap().len(), 3);
    assert_eq!(value["modules"][3], "Molecular Validation");
}
