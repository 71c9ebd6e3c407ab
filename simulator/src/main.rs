use anyhow::Context;
use clap::Parser;
use console::model::SessionSummary;
use generator::profile::{build_steps, GeneratorConfig};
use hazardcore::render::marker::MarkerColor;
use hazardcore::MapConfig;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use workflow::config::SessionScript;
use workflow::runner::Runner;

mod console;
mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Headless hazard map session driver")]
struct Args {
    /// Map settings in YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Alternate hazard catalog in JSON
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Replay a session script from YAML
    #[arg(long)]
    script: Option<PathBuf>,
    /// Replay this many randomly generated interactions
    #[arg(long, default_value_t = 0)]
    random_steps: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Append one JSON summary line per session to this file
    #[arg(long)]
    report: Option<PathBuf>,
    /// Print the catalog before running
    #[arg(long, default_value_t = false)]
    list: bool,
    /// Print every render call of each session
    #[arg(long, default_value_t = false)]
    transcript: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = if let Some(path) = &args.config {
        MapConfig::load(path)
            .with_context(|| format!("loading map config {}", path.display()))?
    } else {
        MapConfig::default()
    };
    if args.catalog.is_some() {
        config.catalog = args.catalog.clone();
    }
    let catalog = config.load_catalog().context("loading hazard catalog")?;

    if args.list {
        for record in catalog.iter() {
            println!(
                "{:>4}  {:<14} {:<7} {}  {}",
                record.id,
                record.category,
                record.severity,
                MarkerColor::for_category(&record.category),
                record.name.trim()
            );
        }
    }

    let runner = Runner::new(config, catalog);
    let mut summaries = Vec::new();

    if let Some(path) = &args.script {
        let script = SessionScript::load(path)?;
        let name = script
            .name
            .clone()
            .unwrap_or_else(|| path.display().to_string());
        summaries.push(runner.execute(&name, &script.steps)?);
    }
    if args.random_steps > 0 {
        let generator = GeneratorConfig {
            steps: args.random_steps,
            seed: args.seed,
            ..Default::default()
        };
        let steps = build_steps(&generator, runner.catalog());
        let name = format!("random seed {}", args.seed);
        summaries.push(runner.execute(&name, &steps)?);
    }
    if summaries.is_empty() && !args.list {
        let script = SessionScript::walkthrough();
        summaries.push(runner.execute("walkthrough", &script.steps)?);
    }

    for summary in &summaries {
        if args.transcript {
            for line in &summary.transcript {
                println!("  {}", line);
            }
        }
        println!("Session {}", summary.headline());
    }

    if let Some(report_path) = &args.report {
        write_report(report_path, &summaries)?;
    }

    Ok(())
}

fn write_report(path: &Path, summaries: &[SessionSummary]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening report {}", path.display()))?;
    for summary in summaries {
        let line = serde_json::to_string(summary).context("serializing session summary")?;
        writeln!(file, "{}", line)?;
    }
    Ok(())
}
