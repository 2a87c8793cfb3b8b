use crate::anchor::resolve_anchored_position;
use crate::config::{Config, load_config};
use crate::dump::{PositionDump, write_dumps, write_position_dump};
use crate::geometry::Placement;
use crate::scenario::{Scenario, parse_scenarios};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "layercraft",
    version,
    about = "Position floating elements against an anchor and viewport"
)]
pub struct Args {
    /// Scenario file (.json / .json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "json")]
    pub output_format: OutputFormat,

    /// Config JSON file with positioning defaults
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Viewport width for scenarios without their own viewport
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Viewport height for scenarios without their own viewport
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,

    /// Default placement, e.g. `bottom-start`
    #[arg(short = 'p', long = "placement")]
    pub placement: Option<Placement>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Css,
}

pub fn run() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.viewport.width = width;
    }
    if let Some(height) = args.height {
        config.viewport.height = height;
    }
    if let Some(placement) = args.placement {
        config.anchor.placement = placement;
    }

    let input = read_input(args.input.as_deref())?;
    let scenarios = parse_scenarios(&input)?;
    if scenarios.is_empty() {
        return Err(anyhow::anyhow!("No scenarios found in input"));
    }

    let dumps = resolve_all(&scenarios, &config);
    info!(count = dumps.len(), "resolved scenarios");

    match args.output_format {
        OutputFormat::Json => match args.output.as_deref() {
            Some(path) => write_position_dump(path, &dumps)?,
            None => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                write_dumps(&mut lock, &dumps)?;
                writeln!(lock)?;
            }
        },
        OutputFormat::Css => {
            let css: String = dumps.iter().map(PositionDump::to_css).collect();
            write_text(&css, args.output.as_deref())?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn resolve_all(scenarios: &[Scenario], config: &Config) -> Vec<PositionDump> {
    scenarios
        .iter()
        .map(|scenario| {
            let options = scenario.options(config);
            let viewport = scenario.viewport(config);
            let resolved = resolve_anchored_position(
                &scenario.anchor,
                &scenario.floating,
                &viewport,
                &options,
            );
            PositionDump::from_resolved(scenario.name.clone(), &options, &resolved)
        })
        .collect()
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()));
        }
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_text(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout().write_all(text.as_bytes())?,
    }
    Ok(())
}
