//! Train command implementation.

use super::corpus::CorpusArgs;
use anyhow::Result as AnyhowResult;
use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    #[command(flatten)]
    pub corpus: CorpusArgs,
}

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let (encoder, summary) = cmd.corpus.train()?;

    println!("Words: {}", encoder.word_count());
    println!("Merges applied: {}", summary.merges_applied);
    println!("Stopped: {}", summary.stop_reason);
    println!("Vocab size: {}", summary.vocab_size);
    println!();

    for merge in encoder.merges() {
        println!(
            "{:>4}  {:<16} pair_count={} applied={}",
            merge.rank,
            format!("{:?}", merge.token),
            merge.pair_count,
            merge.applied
        );
    }

    Ok(())
}
