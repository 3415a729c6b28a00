use std::env::{set_var, var};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use clap::Parser;
use log::{info, trace};
use serde_derive::{Deserialize, Serialize};

use cffdrs::{compute_daily, DailyCodes, FWIModelConfig, InputElement, OutputElement};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Canadian Forest Fire Weather Index System on a daily station series",
    long_about = "Reads a JSON array of daily noon observations \
{date, temperature, humidity, wind_speed, rain} and prints the moisture codes \
and fire behaviour indices of every day as one JSON object per line."
)]
struct Args {
    #[arg(required = true, help = "Path to the JSON observations file", index = 1)]
    input_path: String,

    #[arg(long, default_value_t = 46.0, allow_hyphen_values = true, help = "Station latitude [degrees]")]
    lat: f64,

    #[arg(long, default_value_t = DailyCodes::default().ffmc, help = "FFMC of the day before the series")]
    ffmc: f64,

    #[arg(long, default_value_t = DailyCodes::default().dmc, help = "DMC of the day before the series")]
    dmc: f64,

    #[arg(long, default_value_t = DailyCodes::default().dc, help = "DC of the day before the series")]
    dc: f64,

    #[arg(long, default_value = "legacy", help = "Model version: legacy or clamped")]
    model_version: String,

    #[arg(long, help = "Use the 46N day lengths at every latitude")]
    no_lat_adjust: bool,

    #[arg(long, help = "Use the FBP high wind ISI")]
    fbp_mod: bool,
}

#[derive(Debug, Deserialize)]
struct Observation {
    date: NaiveDate,
    #[serde(flatten)]
    weather: InputElement,
}

#[derive(Debug, Serialize)]
struct DailyRecord {
    date: NaiveDate,
    #[serde(flatten)]
    output: OutputElement,
}

fn read_observations(input_path: &str) -> Result<Vec<Observation>, Box<dyn Error>> {
    if !Path::new(input_path).is_file() {
        return Err(format!("Input file {} is not a file", input_path).into());
    }
    let file = File::open(input_path)?;
    let observations: Vec<Observation> = serde_json::from_reader(BufReader::new(file))
        .map_err(|err| format!("Could not parse observations: {}", err))?;
    Ok(observations)
}

fn run(
    observations: &[Observation],
    start: DailyCodes,
    lat: f64,
    config: &FWIModelConfig,
) -> Result<Vec<DailyRecord>, Box<dyn Error>> {
    let mut codes = start;
    let mut records = Vec::with_capacity(observations.len());
    for obs in observations {
        trace!("Processing {}", obs.date.format("%Y-%m-%d"));
        let output = compute_daily(&codes, &obs.weather, lat, obs.date.month(), config)
            .map_err(|err| format!("{}: {}", obs.date.format("%Y-%m-%d"), err))?;
        codes = DailyCodes::from(&output);
        records.push(DailyRecord {
            date: obs.date,
            output,
        });
    }
    Ok(records)
}

/// main function
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if var("RUST_LOG").is_err() {
        set_var("RUST_LOG", "info")
    }
    pretty_env_logger::init();

    let config = FWIModelConfig::new(&args.model_version)
        .with_lat_adjust(!args.no_lat_adjust)
        .with_fbp_mod(args.fbp_mod);
    let start = DailyCodes {
        ffmc: args.ffmc,
        dmc: args.dmc,
        dc: args.dc,
    };

    let observations = read_observations(&args.input_path)?;
    info!(
        "Loaded {} observations from {}",
        observations.len(),
        args.input_path
    );

    let records = run(&observations, start, args.lat, &config)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for record in &records {
        writeln!(handle, "{}", serde_json::to_string(record)?)?;
    }
    info!("Computed {} days", records.len());
    Ok(())
}
