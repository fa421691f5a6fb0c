//! qrgen command-line entry point
//!
//! Prints exactly one rendered QR code (SVG by default, `--print console` for
//! a block-character grid) to stdout. Diagnostics and logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use qrgen::{ConfigFile, Pipeline, QrGenError, QrcodeEncoder, RenderedOutput};
use qrgen_ids::OsRandom;
use qrgen_logging::LogConfig;
use qrgen_security::Hs256Signer;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

mod cli;

#[derive(Parser, Debug)]
#[command(
    name = "qrgen",
    version,
    about = "Encode text, optionally wrapped in a signed JWT, as a QR code"
)]
struct Cli {
    /// Enable verbose logging (debug to stderr)
    #[arg(short = 'v', long)]
    verbose: bool,

    /// TOML file with default option values; flags override it
    #[arg(short = 'c', long, env = "QRGEN_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    options: cli::OptionArgs,

    #[command(flatten)]
    output: cli::OutputArgs,
}

fn run(cli: Cli) -> Result<RenderedOutput> {
    let target = cli.output.target();
    let mut overrides = cli.options.into_overrides();
    if let Some(path) = cli.config.as_deref() {
        debug!(path = %path.display(), "Loading config file");
        let file = ConfigFile::load(path)?;
        overrides = overrides.layered_over(file.into_overrides());
    }

    // Fresh key every run; tokens are only ever displayed, never verified.
    let signer = Hs256Signer::generate(&mut OsRandom).map_err(QrGenError::from)?;
    let mut pipeline = Pipeline::new(QrcodeEncoder).with_signer(Box::new(signer))?;

    let output = pipeline.run(&overrides, target)?;
    Ok(output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match qrgen_logging::init_logging(LogConfig {
        app_name: "qrgen",
        verbose: cli.verbose,
        file_logging: true,
    }) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Warning: {:#}", err);
            None
        }
    };

    let result = run(cli).and_then(|output| {
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{}", output).context("Failed to write output")?;
        stdout.flush().context("Failed to flush output")
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<QrGenError>() {
                Some(pipeline_err) => {
                    eprint!("{}", cli::HelpfulError::from_pipeline(pipeline_err))
                }
                None => eprintln!("{:?}", err),
            }
            ExitCode::from(1)
        }
    }
}
