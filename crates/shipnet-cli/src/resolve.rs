//! # Resolve Subcommand
//!
//! Loads a network document, resolves every shipment it lists, and prints
//! a text or JSON report. With a DOT directory configured, a route map is
//! written for each resolved shipment.
//!
//! Unresolved shipments are part of a successful run; only configuration
//! and I/O problems produce a non-zero exit code.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use shipnet_routing::{plan_shipments, NoopObserver, ShipmentPlan};

use crate::config::{OutputFormat, ShipnetConfig};
use crate::render::DotObserver;
use crate::report::{render_text, JsonReport};
use crate::source::FileSource;

/// Arguments for the `shipnet resolve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ResolveArgs {
    /// Network document (.json, .yaml, .yml).
    #[arg(long, value_name = "FILE")]
    pub network: Option<PathBuf>,

    /// Use the built-in reference network instead of a file.
    #[arg(long, conflicts_with = "network")]
    pub demo: bool,

    /// Report format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write a DOT route map per resolved shipment into this directory.
    #[arg(long, value_name = "DIR")]
    pub dot_dir: Option<PathBuf>,
}

/// Pick and load the network document: `--demo`, else the explicit path,
/// else the configured one.
pub fn load_source(
    network: Option<&Path>,
    demo: bool,
    config: &ShipnetConfig,
) -> Result<FileSource> {
    if demo {
        return FileSource::demo().context("built-in demo network is invalid");
    }
    let path = config.network_path(network)?;
    FileSource::open(path)
        .with_context(|| format!("failed to load network document {}", path.display()))
}

/// Run the batch and render the report, without printing.
pub fn resolve_report(args: &ResolveArgs, config: &ShipnetConfig) -> Result<String> {
    let source = load_source(args.network.as_deref(), args.demo, config)?;
    let format = args.format.unwrap_or(config.format);
    let dot_dir = args.dot_dir.as_ref().or(config.dot_dir.as_ref());

    let plan = match dot_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create DOT directory {}", dir.display()))?;
            let mut observer = DotObserver::new(dir, source.warehouses().to_vec());
            let plan = plan_shipments(&source, &mut observer)?;
            let written = observer.into_result()?;
            tracing::info!(files = written.len(), dir = %dir.display(), "route maps written");
            plan
        }
        None => plan_shipments(&source, &mut NoopObserver)?,
    };

    render(&plan, format, &source)
}

fn render(plan: &ShipmentPlan, format: OutputFormat, source: &FileSource) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(
            &plan.results,
            &plan.summary,
            source.warehouses(),
        )),
        OutputFormat::Json => {
            let report = JsonReport::new(&plan.results, plan.summary)
                .context("failed to serialize results")?;
            report.to_json().context("failed to serialize report")
        }
    }
}

/// Execute the resolve subcommand.
///
/// Returns exit code 0 once the report has been printed.
pub fn run_resolve(args: &ResolveArgs, config: &ShipnetConfig) -> Result<u8> {
    let report = resolve_report(args, config)?;
    println!("{}", report.trim_end());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_args() -> ResolveArgs {
        ResolveArgs {
            demo: true,
            ..Default::default()
        }
    }

    #[test]
    fn demo_text_report() {
        let report = resolve_report(&demo_args(), &ShipnetConfig::default()).unwrap();
        assert!(report.contains(
            "shipment 1: origin=A, destination=D, min_distance=9.5, route=A -> B -> C -> D"
        ));
        assert!(report.contains("shipment 2: origin=B, destination=A -> route not found"));
        assert!(report.contains("cities: Madrid -> Barcelona -> Valencia -> Sevilla"));
        assert!(report.contains("3 shipments: 2 resolved, 0 unknown origin, 1 unreachable"));
    }

    #[test]
    fn config_format_applies_without_flag() {
        let config = ShipnetConfig {
            format: OutputFormat::Json,
            ..Default::default()
        };
        let report = resolve_report(&demo_args(), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["summary"]["total"], 3);
    }

    #[test]
    fn flag_format_beats_config() {
        let config = ShipnetConfig {
            format: OutputFormat::Json,
            ..Default::default()
        };
        let args = ResolveArgs {
            format: Some(OutputFormat::Text),
            ..demo_args()
        };
        let report = resolve_report(&args, &config).unwrap();
        assert!(report.starts_with("=== SHIPMENT RESULTS ==="));
    }

    #[test]
    fn missing_network_is_an_error() {
        let err = resolve_report(&ResolveArgs::default(), &ShipnetConfig::default()).unwrap_err();
        assert!(err.to_string().contains("no network document"));
    }

    #[test]
    fn empty_network_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        std::fs::write(&path, "shipments:\n  - { id: 1, origin: A, destination: B }\n").unwrap();
        let args = ResolveArgs {
            network: Some(path),
            ..Default::default()
        };
        let err = resolve_report(&args, &ShipnetConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("no routes"), "{err:#}");
    }

    #[test]
    fn dot_dir_receives_route_maps() {
        let dir = tempfile::tempdir().unwrap();
        let maps = dir.path().join("maps");
        let args = ResolveArgs {
            dot_dir: Some(maps.clone()),
            ..demo_args()
        };
        resolve_report(&args, &ShipnetConfig::default()).unwrap();
        assert!(maps.join("route-1.dot").is_file());
        assert!(!maps.join("route-2.dot").exists());
        assert!(maps.join("route-3.dot").is_file());
    }
}
