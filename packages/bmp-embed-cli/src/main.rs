//! `convert-bmp`: embed a BMP file into a C++ header/implementation pair.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use bmp_embed::{
    Artifact, EmbedOptions, Embedder, WriteMode, DEFAULT_DEFINITION_EXT,
};
use clap::{error::ErrorKind, Parser};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const EXAMPLE: &str = "Example: convert-bmp assets/logo.bmp src/logo.hpp";

#[derive(Debug, Parser)]
#[command(
    name = "convert-bmp",
    version,
    about = "Convert a BMP file to a C++ header file with embedded data",
    after_help = EXAMPLE
)]
struct Cli {
    /// BMP file to embed. Its bytes are copied verbatim.
    bmp_file: PathBuf,

    /// Header file to generate. The implementation file is written next to
    /// it with the extension replaced.
    output_header: PathBuf,

    /// Extension of the generated implementation file.
    #[arg(long, value_name = "EXT", default_value = DEFAULT_DEFINITION_EXT)]
    definition_ext: String,

    /// Stage both files and move them into place only once both are
    /// written.
    #[arg(long)]
    staged: bool,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn embed_options(&self) -> EmbedOptions {
        EmbedOptions {
            definition_ext: self.definition_ext.clone(),
            write_mode: if self.staged {
                WriteMode::Staged
            } else {
                WriteMode::Sequential
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let is_info = matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            let _ = err.print();
            if is_info {
                return ExitCode::SUCCESS;
            }

            eprintln!("{EXAMPLE}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = cli.embed_options();
    debug!("Converting {:?} with {:?}", cli.bmp_file, options);

    let embedder = Embedder::new(options);
    let conversion = embedder
        .convert(&cli.bmp_file, &cli.output_header)
        .inspect_err(|err| {
            if embedder.options().write_mode == WriteMode::Sequential
                && err.artifact() == Some(Artifact::Definition)
            {
                warn!(
                    "Header file {:?} was written but its implementation file was not",
                    cli.output_header
                );
            }
        })
        .with_context(|| {
            format!("Failed to convert {}", cli.bmp_file.display())
        })?;

    println!(
        "Created header file: {}",
        conversion.declaration_path.display()
    );
    println!(
        "Created implementation file: {}",
        conversion.definition_path.display()
    );
    println!("Conversion completed successfully!");

    Ok(())
}
