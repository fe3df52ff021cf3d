#[macro_use]
extern crate clap;

mod raster;
mod simulation;
mod viewer;

use std::path::Path;

use clap::{App, ArgMatches};
use tracing_subscriber::EnvFilter;

use particles::{load_config, Config};

pub fn config_from_args(args: &ArgMatches) -> Result<Config, Box<dyn std::error::Error>> {
    match args.value_of("config") {
        Some(path) => load_config(Path::new(path)),
        None => Ok(Config::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let yaml = load_yaml!("cli.yml");
    let matches = App::from_yaml(yaml).get_matches();

    match matches.subcommand() {
        ("view", Some(args)) => viewer::main_viewer(args),
        ("simulate", Some(args)) => simulation::main_simulation(args),
        ("raster", Some(args)) => raster::main_raster(args),
        _ => Ok(()),
    }
}
