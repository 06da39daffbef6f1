//! seqfill command line tool
//!
//! Prints an integer sequence whose elements equal their indices, optionally
//! offset by a start value.

use clap::{Arg, ArgAction, ArgMatches, Command};
use seqfill::app::App;
use seqfill::core::config::{Config, OutputFormat, DEFAULT_CONFIG_FILE};
use seqfill::{Error, Result};
use std::path::Path;
use tracing::debug;

// Configure global allocator for maximum performance
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

fn cli() -> Command {
    Command::new("seqfill")
        .version(seqfill::VERSION)
        .about("Print integer sequences filled with their indices.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
        )
        .arg(
            Arg::new("length")
                .short('n')
                .long("length")
                .value_name("N")
                .help("Number of elements to generate")
        )
        .arg(
            Arg::new("start")
                .short('s')
                .long("start")
                .value_name("S")
                .allow_hyphen_values(true)
                .help("Value of the first element")
        )
        .arg(
            Arg::new("type")
                .short('t')
                .long("type")
                .value_name("TYPE")
                .help("Element type (i8, i16, i32, i64, isize, u8, u16, u32, u64, usize)")
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format (text, json)")
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .value_name("SEP")
                .allow_hyphen_values(true)
                .help("Separator between values in text output")
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (trace, debug, info, warn, error)")
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_name("FORMAT")
                .help("Log format (pretty, compact, json)")
        )
        .arg(
            Arg::new("four")
                .long("four")
                .action(ArgAction::SetTrue)
                .help("Print the constant 4 and exit")
        )
        .arg(
            Arg::new("metrics")
                .long("metrics")
                .action(ArgAction::SetTrue)
                .help("Print Prometheus metrics to stderr after the run")
        )
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let config = load_config(&matches, Path::new(DEFAULT_CONFIG_FILE), |key| std::env::var(key).ok())?;

    seqfill::init(&config)?;
    debug!(?config, "effective configuration");

    let app = App::new(config);

    if matches.get_flag("four") {
        println!("{}", app.four());
        return Ok(());
    }

    let output = app.run()?;
    if !output.body.is_empty() || app.config.output.format == OutputFormat::Json {
        println!("{}", output.body);
    }

    if app.config.metrics.enabled {
        eprint!("{}", seqfill::system::metrics::collect_metrics()?);
    }

    Ok(())
}

/// Layer defaults, config file, `SF_*` lookups, and CLI flags, then validate
fn load_config<F>(matches: &ArgMatches, default_file: &Path, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let path = matches.get_one::<String>("config").map(Path::new);
    let mut config = Config::resolve(path, default_file, lookup)?;

    apply_cli_overrides(&mut config, matches)?;
    config.validate()?;

    Ok(config)
}

/// Apply command line argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, matches: &ArgMatches) -> Result<()> {
    if let Some(length) = matches.get_one::<String>("length") {
        config.sequence.length = length.parse()
            .map_err(|e| Error::invalid_input(format!("Invalid length: {}", e)))?;
    }

    if let Some(start) = matches.get_one::<String>("start") {
        config.sequence.start = start.parse()
            .map_err(|e| Error::invalid_input(format!("Invalid start: {}", e)))?;
    }

    if let Some(element_type) = matches.get_one::<String>("type") {
        config.sequence.element_type = element_type.parse()?;
    }

    if let Some(format) = matches.get_one::<String>("format") {
        config.output.format = format.parse()?;
    }

    if let Some(separator) = matches.get_one::<String>("separator") {
        config.output.separator = separator.clone();
    }

    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }

    if let Some(format) = matches.get_one::<String>("log-format") {
        config.logging.format = format.parse()?;
    }

    if matches.get_flag("metrics") {
        config.metrics.enabled = true;
    }

    Ok(())
}
