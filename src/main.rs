use clap::{Parser, Subcommand};
use groundscale_rs::{
    BoundingBox, BuildingsConfig, DEFAULT_OVERPASS_URL, GroundScaleError, ViewportSample,
    building_query, clip_buildings, fetch_and_save_buildings, parse_overpass, read_geojson,
    try_compute_scale, write_feature_collection,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Scale bars and building footprints for the map viewer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the scale bar for a zoom level and latitude
    Scale {
        #[arg(long)]
        zoom: f64,
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the Overpass query used to fetch buildings
    Query {
        /// south,west,north,east
        #[arg(long, default_value_t = BoundingBox::default())]
        bbox: BoundingBox,
    },
    /// Clip a saved Overpass response to a boundary and write GeoJSON
    ClipBuildings {
        /// Overpass `[out:json]` response file
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "public/export.geojson")]
        boundary: PathBuf,
        #[arg(long, default_value = "public/buildings.geojson")]
        output: PathBuf,
    },
    /// Fetch buildings from Overpass, clip them to a boundary and write GeoJSON
    FetchBuildings {
        /// south,west,north,east
        #[arg(long, default_value_t = BoundingBox::default())]
        bbox: BoundingBox,
        #[arg(long, default_value = DEFAULT_OVERPASS_URL)]
        endpoint: String,
        #[arg(long, default_value = "public/export.geojson")]
        boundary: PathBuf,
        #[arg(long, default_value = "public/buildings.geojson")]
        output: PathBuf,
    },
}

fn main() -> Result<(), GroundScaleError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Scale {
            zoom,
            latitude,
            json,
        } => {
            let scale = try_compute_scale(&ViewportSample::new(zoom, latitude))?;
            if json {
                let out = serde_json::to_string(&scale)
                    .map_err(|e| GroundScaleError::IoError(e.to_string()))?;
                println!("{}", out);
            } else if let Some(label) = scale.label() {
                println!("{:.1}px = {}", scale.pixel_width, label);
            } else {
                println!("hidden below zoom {}", groundscale_rs::MIN_VISIBLE_ZOOM);
            }
        }
        Command::Query { bbox } => println!("{}", building_query(&bbox)),
        Command::ClipBuildings {
            input,
            boundary,
            output,
        } => {
            let body = std::fs::read_to_string(&input)
                .map_err(|e| GroundScaleError::IoError(format!("{}: {}", input.display(), e)))?;
            let response = parse_overpass(&body)?;
            let boundary = read_geojson(&boundary)?;

            let collection = clip_buildings(&response, &boundary)?;
            write_feature_collection(&collection, &output)?;
            println!(
                "{} buildings written to {}",
                collection.features.len(),
                output.display()
            );
        }
        Command::FetchBuildings {
            bbox,
            endpoint,
            boundary,
            output,
        } => {
            let config = BuildingsConfig::new(boundary, output)
                .bbox(bbox)
                .endpoint(endpoint);
            let count = fetch_and_save_buildings(&config)?;
            println!("{} buildings written to {}", count, config.output_path.display());
        }
    }

    Ok(())
}
