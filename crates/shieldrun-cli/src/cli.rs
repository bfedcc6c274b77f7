use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shieldrun_core::unit_conversion::TemperatureUnit;

/// Top-level CLI parser for the `shieldrun` binary.
#[derive(Debug, Parser)]
#[command(
    name = "shieldrun",
    version,
    about = "Type K thermocouple conversion for shield run logs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert the thermocouple column of a log and write the prepared table as CSV
    Convert(ConvertArgs),

    /// Convert millivolt readings given on the command line
    Mv(MvArgs),
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input log (.csv, or .tsv/.tab for tab-separated)
    pub input: PathBuf,

    /// Column holding thermocouple voltages (raw or normalized name)
    #[arg(short = 'c', long)]
    pub voltage_column: Option<String>,

    /// Output CSV path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON processing config
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Header of the timestamp column
    #[arg(long)]
    pub timestamp_column: Option<String>,

    /// Multiplier taking the voltage column to millivolts
    #[arg(long)]
    pub scale: Option<f64>,

    /// Output temperature unit: c, f or k
    #[arg(short, long)]
    pub unit: Option<TemperatureUnit>,
}

#[derive(Debug, Args)]
pub struct MvArgs {
    /// Thermocouple voltages in millivolts
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Output temperature unit: c, f or k
    #[arg(short, long, default_value = "c")]
    pub unit: TemperatureUnit,
}
