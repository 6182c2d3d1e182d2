use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

use radar_layout::{Radar, RadarConfig};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Toml,
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "radar-layout")]
#[command(author, version, about = "Compute blip positions for a ring/sector radar chart")]
struct Args {
    /// Config file path (defaults to ~/.config/radar-layout/radar.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Placement seed, overrides style.seed
    #[arg(short, long)]
    seed: Option<f64>,

    /// Diagram width, overrides the config
    #[arg(short, long)]
    width: Option<f64>,

    /// Grid spacing between candidate positions, overrides style.blips.offset
    #[arg(long)]
    offset: Option<f64>,

    /// Output format
    #[arg(short, long, default_value = "toml")]
    format: OutputFormat,

    /// Write a commented config template to the default path and exit
    #[arg(long)]
    init: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("radar_layout=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if args.init {
        let path = RadarConfig::init_default_config().context("Failed to write config template")?;
        println!("Wrote config template to {}", path.display());
        return Ok(());
    }

    let path = match &args.config {
        Some(path) => path.clone(),
        None => RadarConfig::default_path()
            .filter(|p| p.exists())
            .context("No config given and no default config found (try --init)")?,
    };
    info!("Loading radar config from {}", path.display());

    let mut config = RadarConfig::load(&path)
        .with_context(|| format!("Failed to load config at {}", path.display()))?;
    merge_args(&mut config, &args);

    let radar = Radar::new(config).context("Invalid radar config")?;

    match args.format {
        OutputFormat::Toml => {
            let out = toml::to_string_pretty(&radar.layout()).context("Failed to encode layout")?;
            print!("{}", out);
        }
        OutputFormat::Text => print_text(&radar),
    }

    Ok(())
}

/// CLI flags take priority over the config file
fn merge_args(config: &mut RadarConfig, args: &Args) {
    if let Some(seed) = args.seed {
        config.style.seed = Some(seed);
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(offset) = args.offset {
        config.style.blips.offset = offset;
    }
}

fn print_text(radar: &Radar) {
    println!("seed {}", radar.seed());
    for ring in radar.rings() {
        println!(
            "ring {} {:<16} r={:.2}..{:.2}",
            ring.id,
            ring.label,
            ring.radius,
            ring.outer_radius(radar.scale())
        );
    }
    for sector in radar.sectors() {
        println!(
            "sector {} {:<14} {:.4}..{:.4} rad",
            sector.id, sector.label, sector.start_angle, sector.end_angle
        );
    }
    for entry in radar.entries() {
        match (entry.ring, entry.sector) {
            (Some(ring), Some(sector)) => println!(
                "entry {} {:<20} ring={} sector={} x={:.2} y={:.2}",
                entry.id, entry.label, ring, sector, entry.point.x, entry.point.y
            ),
            _ => println!("entry {} {:<20} unplaced", entry.id, entry.label),
        }
    }
}
