use crate::commands::{
    families::FamiliesArgs, reference::ReferenceArgs, tokenize::TokenizeArgs, vocab::VocabArgs,
};

pub mod families;
pub mod reference;
pub mod tokenize;
pub mod vocab;

/// Subcommands for tokcraft.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Tokenize text with a custom pipeline.
    Tokenize(TokenizeArgs),

    /// Generate a vocabulary from sample text.
    Vocab(VocabArgs),

    /// List model families and their reference tokenizers.
    Families(FamiliesArgs),

    /// Split text with a pretrained reference tokenizer.
    Reference(ReferenceArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Tokenize(cmd) => cmd.run(),
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Families(cmd) => cmd.run(),
            Commands::Reference(cmd) => cmd.run(),
        }
    }
}
