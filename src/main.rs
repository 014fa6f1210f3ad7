use clap::Parser;
use log::{error, info};
use serde::Serialize;
use std::env;
use std::process::ExitCode;

use mesos_es_resources::config::FrameworkConfig;
use mesos_es_resources::core::agent_resources::{parse_resources, ParseResourceError};
use mesos_es_resources::core::offer::select_ports;
use mesos_es_resources::core::resource::Resource;
use mesos_es_resources::core::resources::build_framework_resources;

#[derive(Parser)]
struct Args {
    #[clap(short, long)]
    config_file: std::path::PathBuf,
    /// Resources of one agent's offer, e.g. "ports(*):[9200-9200,9300-9300]".
    /// May be repeated; ports are selected from each offer separately.
    #[clap(short, long)]
    offer: Vec<String>,
    /// How many ports to select from each offer.
    #[clap(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=2))]
    ports: u8,
}

#[derive(Serialize)]
struct Output {
    framework_resources: Vec<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected_ports: Option<Vec<OfferPorts>>,
}

#[derive(Debug, Serialize, PartialEq)]
struct OfferPorts {
    offer: String,
    ports: Vec<u64>,
}

// Ports of one task must come from a single agent, so offers are never merged.
fn select_ports_per_offer(
    offers: &[String],
    count: usize,
) -> Result<Vec<OfferPorts>, ParseResourceError> {
    offers
        .iter()
        .map(|offer| -> Result<OfferPorts, ParseResourceError> {
            let ports = select_ports(&parse_resources(offer)?, count);
            info!("Selected ports {:?} of {} requested from {}", ports, count, offer);
            Ok(OfferPorts {
                offer: offer.clone(),
                ports,
            })
        })
        .collect()
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    info!("Path to config file: {:?}", args.config_file);
    let config = FrameworkConfig::from_file(&args.config_file)?;
    let framework_resources = build_framework_resources(&config);

    let selected_ports = if args.offer.is_empty() {
        None
    } else {
        Some(select_ports_per_offer(&args.offer, args.ports as usize)?)
    };

    let output = Output {
        framework_resources,
        selected_ports,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() -> ExitCode {
    // log level INFO by default
    let mut env_logger_builder = env_logger::builder();
    if env::var("RUST_LOG").is_err() {
        env_logger_builder.filter_level(log::LevelFilter::Info);
    }
    env_logger_builder.init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
