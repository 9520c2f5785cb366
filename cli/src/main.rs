//! subtok CLI - Command-line driver for the BPE tokenizer.
//!
//! Every command trains a fresh encoder from a corpus file first; nothing is
//! persisted between runs.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{DecodeCommand, DumpCommand, EncodeCommand, TrainCommand};
use env_logger::Env;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "subtok")]
#[command(about = "A from-scratch BPE tokenizer", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease log verbosity (-q warn, -qq error)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on a corpus and print the learned merges
    Train(TrainCommand),
    /// Train on a corpus, then encode text to token IDs
    Encode(EncodeCommand),
    /// Train on a corpus, then decode token IDs
    Decode(DecodeCommand),
    /// Train on a corpus and print every internal table
    Dump(DumpCommand),
}

fn init_logging(verbose: u8, quiet: u8) {
    let level = match (quiet, verbose) {
        (0, 0) => LevelFilter::Info,
        (0, 1) => LevelFilter::Debug,
        (0, _) => LevelFilter::Trace,
        (1, _) => LevelFilter::Warn,
        _ => LevelFilter::Error,
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    builder.filter_level(level);
    let _ = builder.try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Dump(cmd) => commands::dump::run(cmd)?,
    }

    Ok(())
}
