//! thermoconv CLI
//!
//! With no subcommand, opens the interactive converter. `convert` and
//! `reference` print to stdout for scripting.

use std::fs::{self, File};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{info, warn, LevelFilter};
use simplelog::{ConfigBuilder, WriteLogger};

use thermoconv::config::{load_config, log_outcome, log_path, resolve};
use thermoconv::engine::convert;
use thermoconv::error::AppError;
use thermoconv::input::parse_input;
use thermoconv::reference::format_reference;
use thermoconv::report::{format_report, ConversionReport};
use thermoconv::types::{OutputFormat, TemperatureUnit};

#[derive(Parser)]
#[command(name = "thermoconv")]
#[command(about = "Convert temperatures between Celsius, Fahrenheit and Kelvin")]
#[command(version)]
struct Cli {
    /// Unit preselected in the interactive converter (c, f, k)
    #[arg(long, value_parser = parse_unit)]
    unit: Option<TemperatureUnit>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one value and print all three scales
    Convert {
        /// Temperature value (negative values allowed)
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Unit of VALUE (c, f, k); defaults to the configured unit
        #[arg(long, value_parser = parse_unit)]
        from: Option<TemperatureUnit>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Print freezing and boiling reference points for each scale
    Reference,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn parse_unit(s: &str) -> Result<TemperatureUnit, String> {
    s.parse::<TemperatureUnit>().map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match load_config() {
        Ok((file_config, source)) => {
            let cli_unit = match &cli.command {
                Some(Commands::Convert { from, .. }) => from.or(cli.unit),
                _ => cli.unit,
            };
            let config = resolve(&file_config, cli_unit);
            init_logging(config.log_level);
            info!("thermoconv starting, unit {}", config.initial_unit);
            log_outcome(&source, &config);

            match cli.command {
                None => thermoconv::tui::run(config.initial_unit).map_err(AppError::from),
                Some(Commands::Convert { value, format, .. }) => {
                    cmd_convert(&value, config.initial_unit, format.into())
                }
                Some(Commands::Reference) => cmd_reference(),
            }
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

/// Log to a file; stdout belongs to the TUI and to command output.
///
/// If the log file cannot be created, logging stays disabled.
fn init_logging(level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }

    let Some(path) = log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_convert(text: &str, unit: TemperatureUnit, format: OutputFormat) -> Result<(), AppError> {
    let value = parse_input(text).ok_or_else(|| {
        warn!("Rejected input {:?}", text);
        AppError::InvalidInput(text.to_string())
    })?;

    let report = ConversionReport::new(value, unit, convert(value, unit));
    info!("Converted {} {} -> {:?}", value, unit, report.result);

    match format {
        OutputFormat::Human => print!("{}", format_report(&report, format)),
        OutputFormat::Json => println!("{}", format_report(&report, format)),
    }

    Ok(())
}

fn cmd_reference() -> Result<(), AppError> {
    print!("{}", format_reference());
    Ok(())
}
