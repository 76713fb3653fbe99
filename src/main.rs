use clap::Parser;
use kml_analyzer::error::{KmlError, Result};
use kml_analyzer::{Session, export, overlay, svg};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(about = "Summarize the geometries of a KML file")]
struct Cli {
    /// The .kml file to analyse
    path: PathBuf,
    /// Show the number of geometries per type
    #[arg(long)]
    summary: bool,
    /// Show the length of every line geometry
    #[arg(long)]
    details: bool,
    /// Draw the map overlay into this SVG file
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Write the geometry collection as GeoJSON
    #[arg(long)]
    geojson: Option<PathBuf>,
}

fn write(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| KmlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn run(args: &Cli) -> Result<()> {
    let mut session = Session::new();
    let Some(collection) = session.load_file(&args.path) else {
        return Ok(());
    };
    println!("features: {}", collection.len());

    if let Some(path) = &args.geojson {
        let fc = export::to_feature_collection(collection);
        let json = serde_json::to_string_pretty(&fc)
            .map_err(|e| KmlError::Serialization(e.to_string()))?;
        write(path, &json)?;
    }

    if let Some(path) = &args.svg {
        let overlays = overlay::overlays(collection);
        match svg::SVG::around(&overlays) {
            Some(mut canvas) => {
                overlays.iter().for_each(|o| canvas.add_overlay(o));
                write(path, &canvas.render())?;
            }
            None => log::warn!("nothing to draw, {} not written", path.display()),
        }
    }

    if args.summary {
        if let Some(summary) = session.toggle_summary() {
            println!();
            println!("Summary");
            for (kind, count) in summary {
                println!("  {}: {}", kind, count);
            }
        }
    }

    if args.details {
        if let Some(details) = session.toggle_details() {
            println!();
            println!("Details");
            for record in details {
                println!("  {}", record);
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
