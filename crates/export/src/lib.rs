//! Export helpers for CSV and JSON rocket reports.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rocket_core::Payload;
use rocket_propulsion::Stage;
use serde::Serialize;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Per-stage entry of a rocket report.
#[derive(Debug, Clone, Serialize)]
pub struct StageRecord {
    pub name: String,
    pub engine_kind: String,
    pub engine_count: usize,
    pub total_thrust: f64,
    pub fuel_level: Option<f64>,
}

/// Snapshot of an assembled rocket.
#[derive(Debug, Clone, Serialize)]
pub struct RocketReport {
    pub rocket: String,
    pub payload_kind: Option<String>,
    pub payload_weight: Option<f64>,
    pub stages: Vec<StageRecord>,
    pub generated_utc: String,
}

impl RocketReport {
    pub fn new(rocket: &str, payload: Option<&Payload>, stages: &[Stage]) -> Self {
        Self {
            rocket: rocket.to_string(),
            payload_kind: payload.map(|p| p.kind.to_string()),
            payload_weight: payload.map(|p| p.weight),
            stages: stages.iter().map(stage_record).collect(),
            generated_utc: chrono::Utc::now()
                .format("%Y-%m-%dT%H:%M:%SZ")
                .to_string(),
        }
    }
}

fn stage_record(stage: &Stage) -> StageRecord {
    StageRecord {
        name: stage.name.clone(),
        engine_kind: stage
            .engine_kind()
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "mixed".to_string()),
        engine_count: stage.engine_count(),
        total_thrust: stage.total_thrust(),
        fuel_level: stage.fuel_level(),
    }
}

pub mod summary {
    use std::io::{self, Write};

    use serde_json::to_writer_pretty;

    use super::RocketReport;

    /// Write the report as pretty-printed JSON followed by a newline.
    pub fn write_json(writer: &mut dyn Write, report: &RocketReport) -> io::Result<()> {
        to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)
    }
}

pub mod stages {
    use std::io::{self, Write};

    use serde::Serialize;

    use super::RocketReport;

    #[derive(Serialize)]
    struct Row<'a> {
        rocket: &'a str,
        stage: &'a str,
        engine_kind: &'a str,
        engine_count: usize,
        total_thrust: f64,
        fuel_level: Option<f64>,
    }

    /// Write one CSV row per stage, with a header.
    pub fn write_csv(writer: &mut dyn Write, report: &RocketReport) -> io::Result<()> {
        let mut out = csv::Writer::from_writer(writer);
        for stage in &report.stages {
            out.serialize(Row {
                rocket: &report.rocket,
                stage: &stage.name,
                engine_kind: &stage.engine_kind,
                engine_count: stage.engine_count,
                total_thrust: stage.total_thrust,
                fuel_level: stage.fuel_level,
            })?;
        }
        out.flush()
    }
}
