use std::io::Write;

use anyhow::Context;
use shieldrun_core::config::ProcessingConfig;
use shieldrun_core::datalog::{write_csv, write_csv_file, DerivedColumn, SensorLog};
use shieldrun_core::thermocouple::voltage_to_temp_type_k;

use crate::cli::{ConvertArgs, MvArgs};

/// Merge the config file (if any) with command line overrides.
fn resolve_config(args: &ConvertArgs) -> anyhow::Result<ProcessingConfig> {
    let mut config = match &args.config {
        Some(path) => ProcessingConfig::load(path)?,
        None => ProcessingConfig::default(),
    };

    if let Some(column) = &args.voltage_column {
        config.voltage_column = Some(column.clone());
    }
    if let Some(column) = &args.timestamp_column {
        config.timestamp_column = column.clone();
    }
    if let Some(scale) = args.scale {
        config.voltage_scale = scale;
    }
    if let Some(unit) = args.unit {
        config.unit = unit;
    }

    Ok(config)
}

pub fn convert(args: &ConvertArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let config = resolve_config(args)?;
    let voltage_column = config
        .voltage_column
        .as_deref()
        .context("no voltage column given (use --voltage-column or set voltage_column in the config)")?;

    let options = config.load_options(&args.input);
    let log = SensorLog::from_path(&args.input, &options)?;

    let raw = log
        .column_f64(voltage_column)
        .with_context(|| format!("column '{voltage_column}' not found in '{}'", args.input.display()))?;

    // Blank readings become NaN and come back out as blank temperatures
    let mv: Vec<f64> = raw
        .iter()
        .map(|v| v.map_or(f64::NAN, |v| v * config.voltage_scale))
        .collect();
    let temps: Vec<Option<f64>> = voltage_to_temp_type_k(&mv)
        .with_context(|| format!("failed to convert column '{voltage_column}'"))?
        .into_iter()
        .map(|c| Some(config.unit.convert(c)))
        .collect();

    let name = format!("T_{}", config.unit.suffix());
    let derived = [DerivedColumn {
        name: &name,
        values: &temps,
    }];

    match &args.output {
        Some(path) => write_csv_file(path, &log, &derived)
            .with_context(|| format!("failed to write '{}'", path.display()))?,
        None => write_csv(out, &log, &derived).context("failed to write CSV output")?,
    }

    tracing::info!(
        "Converted {} rows of '{voltage_column}' ({:.3} s)",
        log.len(),
        log.duration_secs().unwrap_or_default()
    );
    Ok(())
}

pub fn mv(args: &MvArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let temps = voltage_to_temp_type_k(&args.values)?;
    for (mv, c) in args.values.iter().zip(temps) {
        writeln!(out, "{mv} mV\t{} {}", args.unit.convert(c), args.unit)?;
    }
    Ok(())
}
