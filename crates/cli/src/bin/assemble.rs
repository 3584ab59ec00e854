use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rocket_assembly::builder::{Director, Payload, Rocket, catalog};
use rocket_assembly::config::load_builder_configs;
use rocket_assembly::export::{RocketReport, stages, summary, writer_for_path};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about = "Assemble a rocket from a builder catalog")]
struct Cli {
    /// Payload weight
    #[arg(long, allow_negative_numbers = true)]
    weight: f64,

    /// Builder name from the catalog (case-insensitive, defaults to the first entry)
    #[arg(long)]
    builder: Option<String>,

    /// Payload kind
    #[arg(long, value_enum, default_value_t = PayloadArg::Satellite)]
    payload: PayloadArg,

    /// Catalog number for satellite payloads
    #[arg(long, default_value_t = 1)]
    satellite_id: u32,

    /// Builder catalog: directory of TOML files, a TOML file, or a YAML list
    #[arg(long, default_value = "configs/builders")]
    catalog: PathBuf,

    /// Write a JSON report (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write a CSV stage table (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum PayloadArg {
    Probe,
    Satellite,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let catalog_entries = load_builder_configs(&cli.catalog)?;
    let mut builder = catalog::select(&catalog_entries, cli.builder.as_deref())?;

    let payload = match cli.payload {
        PayloadArg::Probe => Payload::probe(cli.weight),
        PayloadArg::Satellite => Payload::satellite(cli.satellite_id, cli.weight),
    };

    let rocket = Director::new().prepare_rocket(builder.as_mut(), payload)?;
    print_summary(&rocket);

    let report = RocketReport::new(&rocket.name, rocket.payload(), rocket.stages());
    if let Some(path) = &cli.json {
        let mut writer = writer_for_path(path)?;
        summary::write_json(writer.as_mut(), &report)?;
        writer.flush()?;
        tracing::info!(path = %path.display(), "wrote JSON report");
    }
    if let Some(path) = &cli.csv {
        let mut writer = writer_for_path(path)?;
        stages::write_csv(writer.as_mut(), &report)?;
        writer.flush()?;
        tracing::info!(path = %path.display(), stages = report.stages.len(), "wrote CSV stage table");
    }

    Ok(())
}

/// `ROCKET_LOG_FORMAT=json` switches to machine-parseable output; filters come from `RUST_LOG`.
fn init_tracing() {
    let log_format = std::env::var("ROCKET_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rocket_builder=info,assemble=info".into());

    let registry = tracing_subscriber::registry().with(filter);
    match log_format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn print_summary(rocket: &Rocket) {
    println!("=== {} Rocket ===", rocket.name);
    if let Some(payload) = rocket.payload() {
        println!("Payload        : {} ({:.1})", payload.kind, payload.weight);
    }
    println!("Stages         : {}", rocket.stage_count());
    for (index, stage) in rocket.stages().iter().enumerate() {
        let fuel = stage
            .fuel_level()
            .map(|level| format!("{level:.1}%"))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "  [{}] {:<14}: {} x {} engine(s), thrust = {:.1}, fuel = {}",
            index + 1,
            stage.name,
            stage.engine_count(),
            stage
                .engine_kind()
                .map(|kind| kind.to_string())
                .unwrap_or_else(|| "mixed".to_string()),
            stage.total_thrust(),
            fuel
        );
    }
}
