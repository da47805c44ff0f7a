use std::{env, path::PathBuf};

use day1::{calculate_distance, calculate_proximity, DEFAULT_INPUT, DEFAULT_LOG_FILTER};
use tracing::warn;
use tracing_subscriber::prelude::*;

fn init_logging() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER))?;
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}

fn input_path() -> PathBuf {
    let mut args = env::args_os().skip(1);
    let path = args.next().map_or_else(|| PathBuf::from(DEFAULT_INPUT), PathBuf::from);
    let extra = args.count();
    if extra > 0 {
        warn!(extra, "ignoring arguments after the input path");
    }
    path
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let path = input_path();
    match calculate_distance(&path) {
        Ok(distance) => println!("Total distance: {distance}"),
        Err(err) => println!("Error: {err}"),
    }
    match calculate_proximity(&path) {
        Ok(proximity) => println!("Total proximity: {proximity}"),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}
