use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

mod command;
mod error;

use redactor::config::RedactorConfig;

use crate::command::OutputTarget;
use crate::error::*;

#[derive(Debug, Parser)]
#[command(name = "Redactor", version = env!("CARGO_PKG_VERSION"), author = env!("CARGO_PKG_AUTHORS"))]
struct Opt {
    #[arg(short = 'v', action = clap::ArgAction::Count, help = "Verbosity")]
    verbosity: u8,

    #[command(flatten)]
    general_options: GeneralOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
pub struct GeneralOptions {
    #[arg(long = "config-path", help = "Specify config directory to use")]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(name = "generate-config", about = "Generate default configuration file")]
    GenerateConfig,

    #[command(name = "redact", about = "Blank out inputs inside an element and hide it")]
    Redact {
        #[arg(help = "HTML file to redact")]
        file: PathBuf,
        #[arg(help = "ID of the element to redact")]
        id: String,
        #[arg(short = 'o', long = "output", help = "Write result to this file instead of stdout")]
        output: Option<PathBuf>,
        #[arg(long = "in-place", conflicts_with = "output", help = "Overwrite the input file")]
        in_place: bool,
    },
}

fn main() {
    let opt = Opt::parse();

    // Vary the output based on how many times the user used the "verbose" flag
    // (i.e. 'myprog -v -v -v' or 'myprog -vvv' vs 'myprog -v'
    let log_level = match opt.verbosity {
        0 => LevelFilter::OFF,
        1 => LevelFilter::ERROR,
        2 => LevelFilter::WARN,
        3 => LevelFilter::INFO,
        4 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // Initialize logging
    initialize_logging(log_level);

    debug!("Debug logging enabled.");

    let cmd_result = match opt.command {
        Command::GenerateConfig => generate_default_config(&opt.general_options),
        Command::Redact {
            file,
            id,
            output,
            in_place,
        } => {
            let target = OutputTarget::from_args(&file, output, in_place);

            load_config(&opt.general_options).and_then(|cfg| command::redact(&file, &id, target, &cfg))
        }
    };

    match cmd_result {
        Ok(_) => {}
        Err(err) => {
            // Print error description to stderr
            eprintln!("{}", err.description);

            // Return the exit code that corresponds to the error kind
            std::process::exit(err.kind.exit_code());
        }
    };
}

fn initialize_logging(our_level_filter: LevelFilter) {
    const BIN_MODULE: &str = env!("CARGO_CRATE_NAME");
    const LIB_MODULE: &str = "redactor";

    // RUST_LOG takes precedence over the verbosity flag.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "error,{}={},{}={}",
            BIN_MODULE, our_level_filter, LIB_MODULE, our_level_filter
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(general_options: &GeneralOptions) -> Result<RedactorConfig, CliError> {
    let config = if let Some(config_path) = general_options
        .config_path
        .clone()
        .or_else(redactor::config::get_default_config_path)
    {
        RedactorConfig::from_location(&config_path)?
    } else {
        warn!("No config path specified, and no default path could be determined.");

        RedactorConfig::default()
    };

    debug!("Using config: {:?}", config);

    Ok(config)
}

fn generate_default_config(general_options: &GeneralOptions) -> Result<(), CliError> {
    if let Some(config_path) = general_options.config_path.as_ref() {
        RedactorConfig::write_default_to(config_path)?;
    } else {
        redactor::config::generate_default_config()?;
    }

    Ok(())
}
