//! Metro Loop Track (CLI).
//!
//! Lädt eine Track-Definition (TOML), baut die geschlossene Schleife und
//! schreibt Spline-Punkte und Stationen als JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use metro_loop_track::{LoopExport, TrackDefinition};

#[derive(Parser, Debug)]
#[command(name = "metro-loop-track", version, about = "Baut Metro-Schleifen aus Wegpunkten")]
struct Cli {
    /// Pfad zur Track-Definition (TOML)
    definition: PathBuf,

    /// Ziel-Datei für den JSON-Export (Standard: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Parameter nicht auf die empfohlenen Bereiche begrenzen
    #[arg(long)]
    no_clamp: bool,
}

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    log::info!(
        "Metro Loop Track v{} baut: {}",
        env!("CARGO_PKG_VERSION"),
        cli.definition.display()
    );

    let definition = TrackDefinition::load_from_file(&cli.definition)?;
    let track = definition.build(!cli.no_clamp)?;
    let export = LoopExport::from(&track);

    log::info!(
        "Schleife: {} Punkte, {} Stationen, Länge {:.2}",
        track.spline_points.len(),
        track.stations.len(),
        track.loop_length()
    );

    match cli.output {
        Some(path) => export.write_to_file(&path)?,
        None => println!("{}", export.to_json_pretty()?),
    }

    Ok(())
}
