mod commands;
mod input_output;
mod logging;
mod pipeline_args;

use clap::Parser;
use commands::Commands;

/// tokcraft: build and test custom tokenizers.
#[derive(clap::Parser, Debug)]
#[command(name = "tokcraft")]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
