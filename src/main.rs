//! Main binary entry point for the json-xml-adapter demo.

use clap::Parser;
use colored::Colorize;
use json_xml_adapter::errors::ConverterError;
use json_xml_adapter::{Config, DEFAULT_INPUT, DEFAULT_RECORD_ID, InputSource};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "TEXT", conflicts_with = "file")]
    input: Option<String>,

    #[arg(short, long, value_name = "FILE", help = "Read the text to convert from a file")]
    file: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_RECORD_ID, allow_negative_numbers = true)]
    id: i64,

    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[arg(long, help = "Also print the intermediate JSON produced by the service")]
    show_json: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter_level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter(None, filter_level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run_app() -> Result<(), ConverterError> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let input = match (cli.input, cli.file) {
        (_, Some(path)) => InputSource::File(path),
        (Some(text), None) => InputSource::Text(text),
        (None, None) => InputSource::Text(DEFAULT_INPUT.to_string()),
    };

    let config = Config {
        input,
        id: cli.id,
        output_file: cli.output,
        show_json: cli.show_json,
    };

    eprintln!("{}", "--- Adapter pattern demo: JSON -> XML ---".bold());
    let stdout = std::io::stdout();
    json_xml_adapter::run(&config, &mut stdout.lock())?;
    eprintln!("{}", "---".bold());
    Ok(())
}

fn main() -> ExitCode {
    match run_app() {
        Ok(_) => {
            log::info!("Conversion completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("A fatal error occurred:");
            log::error!("{}", e);
            let mut source = std::error::Error::source(&e);
            while let Some(s) = source {
                log::error!("  Caused by: {}", s);
                source = std::error::Error::source(s);
            }
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
