use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use hexblocks::Backend;
use log::info;

const EXAMPLES: &str = "\
Examples:
  Encode: cat hexfile.txt | hexblocks -b blocks_per_row [-v] > output.png/svg
  Decode: cat input.png/svg | hexblocks -d [-v] > output.txt";

/// Encode hex text as a grid of colored blocks, or decode such an image back to hex
#[derive(Parser)]
#[command(
    name = "hexblocks",
    version,
    disable_help_flag = true,
    after_help = EXAMPLES
)]
struct Cli {
    /// Decode PNG/SVG to hex
    #[arg(short = 'd')]
    decode: bool,

    /// Number of blocks per row (0 or less for a single row)
    #[arg(
        short = 'b',
        value_name = "BLOCKS",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    blocks_per_row: i64,

    /// Use SVG format instead of PNG
    #[arg(short = 'v')]
    vector: bool,

    /// Show help
    #[arg(short = 'h')]
    help: bool,
}

fn print_usage() {
    eprintln!("{}", Cli::command().render_help());
}

fn encode(blocks_per_row: i64, backend: Backend) -> Result<()> {
    let stdout = BufWriter::new(io::stdout().lock());
    let geometry = hexblocks::encode(io::stdin().lock(), stdout, blocks_per_row, backend)?;
    info!(
        "wrote {}x{} {} with {} blocks",
        geometry.width,
        geometry.height,
        backend.name(),
        geometry.block_count
    );
    Ok(())
}

fn decode(backend: Backend) -> Result<()> {
    let stdout = BufWriter::new(io::stdout().lock());
    let payload = hexblocks::decode(io::stdin().lock(), stdout, backend)?;
    info!("recovered {} bytes from {}", payload.len(), backend.name());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if std::env::args_os().len() <= 1 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let cli = Cli::parse();
    if cli.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let backend = Backend::from_vector_flag(cli.vector);
    let (stage, result) = if cli.decode {
        ("decoding", decode(backend))
    } else {
        ("encoding", encode(cli.blocks_per_row, backend))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The library error already carries its cause in its message.
            eprintln!("Error {stage}: {err}");
            ExitCode::from(1)
        }
    }
}
