use std::{error::Error, fs, path::Path};

use clap::Parser;
use footprint_pipeline::{feature_collection, run_batch, FootprintJobConfig, ImageMetadata};

/// Footprint CLI for UAV survey imagery.
#[derive(Debug, Parser)]
#[command(author, version, about = "UAV ground-footprint pipeline")]
struct Args {
    /// Path to JSON file containing a list of ImageMetadata records.
    #[arg(long)]
    input: String,

    /// Optional path to a JSON FootprintJobConfig. Defaults are used if omitted.
    #[arg(long)]
    config: Option<String>,
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    let value = serde_json::from_str(&data)?;
    Ok(value)
}

fn run_footprints_from_files(
    input_path: &str,
    config_path: Option<&str>,
) -> Result<String, Box<dyn Error>> {
    let images: Vec<ImageMetadata> = load_json_file(Path::new(input_path))?;

    let config = if let Some(cfg_path) = config_path {
        load_json_file::<FootprintJobConfig>(Path::new(cfg_path))?
    } else {
        FootprintJobConfig::default()
    };

    let report = run_batch(&images, &config)?;
    let collection = feature_collection(&report);
    Ok(serde_json::to_string_pretty(&collection)?)
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let json = run_footprints_from_files(&args.input, args.config.as_deref())?;
    println!("{}", json);
    Ok(())
}
