//! Command-line resume importer.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;

use unresume::{
    detect_kind_from_path, extract_text, import_file_with_options, merge_resume, ImportOptions,
    ResumeData,
};

#[derive(Parser)]
#[command(name = "unresume")]
#[command(about = "Extract structured resume data from PDF and PowerPoint files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Decode pages/slides sequentially instead of on a thread pool
    #[arg(long, global = true)]
    sequential: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a resume file and print the structured data as JSON
    Import {
        /// Input file (.pdf or .pptx)
        input: PathBuf,

        /// Existing resume JSON to merge the extraction into
        #[arg(long, value_name = "FILE")]
        into: Option<PathBuf>,

        /// Write JSON to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Extract and print the raw text of a resume file
    Text {
        /// Input file (.pdf or .pptx)
        input: PathBuf,
    },

    /// Print a populated sample resume record as JSON
    Sample {
        /// Write JSON to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    let options = ImportOptions {
        parallel: !cli.sequential,
    };

    if let Err(err) = run(&cli, &options) {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(cli: &Cli, options: &ImportOptions) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Import {
            input,
            into,
            output,
            compact,
        } => {
            let extracted = import_file_with_options(input, options)?;

            let data = match into {
                Some(path) => {
                    let existing: ResumeData = serde_json::from_str(&fs::read_to_string(path)?)?;
                    merge_resume(&existing, &extracted)
                }
                None => extracted,
            };

            write_json(&data, output.as_deref(), *compact)?;
            if output.is_some() {
                eprintln!("{}", "Import complete.".green());
            }
            Ok(())
        }

        Commands::Text { input } => {
            let kind = detect_kind_from_path(input)?;
            let bytes = fs::read(input)?;
            let text = extract_text(&bytes, kind, options)?;
            log::debug!("extracted {} characters", text.chars().count());
            println!("{text}");
            Ok(())
        }

        Commands::Sample { output, compact } => {
            write_json(&ResumeData::sample(), output.as_deref(), *compact)
        }
    }
}

fn write_json(
    data: &ResumeData,
    output: Option<&std::path::Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };

    match output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
