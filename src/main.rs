//! unit-converter CLI
//!
//! Converts values between units and serves the web UI.
//!
//! Usage:
//!   unit-converter convert <CATEGORY> <VALUE> <FROM> <TO> [OPTIONS]
//!   unit-converter units [CATEGORY]
//!   unit-converter web [OPTIONS]

use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use unit_converter::{
    Category, ConversionRequest, ConverterConfig, build_chart_spec_with_style, load_config,
    web::{AppState, ServerConfig, start_server},
    write_json, write_text, write_units,
};

/// unit-converter - Convert length, weight and temperature values
#[derive(Parser, Debug)]
#[command(name = "unit-converter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (default: search for .converter.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a value from one unit to another
    Convert(ConvertArgs),

    /// List the available units
    Units {
        /// Only list units of this category
        category: Option<Category>,
    },

    /// Start the web UI
    Web(WebArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Category: length, weight or temperature
    category: Category,

    /// Value to convert
    #[arg(allow_hyphen_values = true)]
    value: f64,

    /// Source unit (e.g. Kilometer)
    from: String,

    /// Target unit (e.g. Meter)
    to: String,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Include the comparison chart
    #[arg(long)]
    chart: bool,

    /// Decimal places of the result (default: 4)
    #[arg(short, long)]
    precision: Option<usize>,

    /// Return the value unchanged for unknown temperature units
    #[arg(long)]
    lenient: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct WebArgs {
    /// Port for web server (default: 8501)
    #[arg(long)]
    port: Option<u16>,

    /// Don't open browser automatically when starting web server
    #[arg(long)]
    no_open: bool,

    /// API endpoint URL for frontend (useful for separate deployments)
    #[arg(long)]
    api_endpoint: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_cli_config(&cli)?;

    match cli.command {
        Commands::Convert(args) => run_convert(args, &config, cli.verbose),
        Commands::Units { category } => {
            let mut out = stdout().lock();
            write_units(&mut out, category)?;
            Ok(())
        }
        Commands::Web(args) => run_web(args, config, cli.verbose),
    }
}

fn load_cli_config(cli: &Cli) -> Result<ConverterConfig, Box<dyn std::error::Error>> {
    match &cli.config {
        // An explicit config file must load
        Some(path) => {
            if !path.is_file() {
                return Err(format!("Config file not found: {}", path.display()).into());
            }
            let config = load_config(path)?;
            if cli.verbose {
                eprintln!("Loaded configuration from {}", path.display());
            }
            Ok(config)
        }
        None => {
            let cwd = std::env::current_dir()?;
            match load_config(&cwd) {
                Ok(config) => Ok(config),
                Err(e) => {
                    if cli.verbose {
                        eprintln!("Note: No config file loaded: {}", e);
                    }
                    Ok(ConverterConfig::default())
                }
            }
        }
    }
}

fn run_convert(
    args: ConvertArgs,
    config: &ConverterConfig,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let precision = args.precision.unwrap_or(config.display.precision);
    let lenient = args.lenient || config.conversion.lenient_temperature;

    let request = ConversionRequest::new(args.category, args.value, args.from, args.to);
    if verbose {
        eprintln!(
            "Converting {} {} -> {} ({}{})",
            request.value,
            request.from_unit,
            request.to_unit,
            request.category,
            if lenient { ", lenient" } else { "" }
        );
    }

    let result = if lenient {
        request.execute_lenient()?
    } else {
        request.execute()?
    };

    let chart = (args.chart || args.json).then(|| {
        build_chart_spec_with_style(
            result.request.value,
            result.value,
            &result.request.from_unit,
            &result.request.to_unit,
            &config.chart_style(),
        )
    });
    // Text output only draws the chart when asked for
    let text_chart = if args.chart { chart.as_ref() } else { None };

    let output: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(stdout()),
    };

    let mut writer = output;

    if args.json {
        write_json(&mut writer, &result, chart.as_ref(), precision)?;
    } else {
        write_text(&mut writer, &result, text_chart, precision)?;
    }
    writer.flush()?;

    if let Some(path) = &args.output {
        eprintln!("Result written to: {}", path.display());
    }

    Ok(())
}

fn run_web(
    args: WebArgs,
    config: ConverterConfig,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = AppState::from_config(&config);
    if args.api_endpoint.is_some() {
        state.api_endpoint = args.api_endpoint;
    }

    let server_config = ServerConfig {
        port: args.port.unwrap_or(config.server.port),
        open_browser: config.server.open_browser && !args.no_open,
        verbose,
    };

    // Run the web server using tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(start_server(state, server_config))
        .map_err(|e| -> Box<dyn std::error::Error> { e })?;

    Ok(())
}
