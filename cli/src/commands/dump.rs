//! Dump command implementation.

use super::corpus::CorpusArgs;
use anyhow::Result as AnyhowResult;
use clap::Parser;

/// Dump command arguments.
#[derive(Parser)]
pub struct DumpCommand {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Print the tables as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(cmd: DumpCommand) -> AnyhowResult<()> {
    let (encoder, _) = cmd.corpus.train()?;
    let dump = encoder.dump();

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        print!("{}", dump);
    }

    Ok(())
}
