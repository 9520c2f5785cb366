//! Encode command implementation.

use super::corpus::CorpusArgs;
use anyhow::Result as AnyhowResult;
use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Text to encode ("-" reads stdin)
    #[arg(short, long)]
    pub text: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let (encoder, _) = cmd.corpus.train()?;

    // Read input text (from stdin if "-")
    let input_text = if cmd.text == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        cmd.text
    };

    let ids = encoder.encode(&input_text);
    let tokens = encoder.decode(&ids);

    let ids_str: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    let output = format!("{}\n{:?}", ids_str.join(" "), tokens);

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            println!("Encoded {} tokens to {}", ids.len(), path);
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
