//! Decode command implementation.

use super::corpus::CorpusArgs;
use anyhow::Result as AnyhowResult;
use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Token IDs to decode (comma-separated)
    #[arg(short, long)]
    pub ids: String,

    /// Fail on IDs with no vocabulary entry instead of printing ""
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let (encoder, _) = cmd.corpus.train()?;

    // Parse token IDs
    let ids: Vec<u32> = cmd
        .ids
        .split(',')
        .map(|s| s.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()?;

    let tokens = if cmd.strict {
        encoder.decode_strict(&ids)?
    } else {
        encoder.decode(&ids)
    };

    println!("{:?}", tokens);

    Ok(())
}
