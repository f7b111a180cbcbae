use std::sync::Arc;

use tokcraft::{
    TokenizerPipeline, TokenizerSession,
    config::{ChunkPolicy, ConfigUpdate, ModelFamily, PipelineConfig},
    vocab::Vocabulary,
};

use crate::input_output::read_text;

/// Pipeline configuration arg group.
#[derive(clap::Args, Debug)]
pub struct PipelineArgs {
    /// Model family: wordpiece, bpe, unigram, sentencepiece.
    ///
    /// Selects the reference tokenizer used for vocabulary generation.
    #[arg(long, default_value = "wordpiece")]
    family: String,

    /// Chunk policy: whitespace, bert, punctuation, whole.
    ///
    /// Unrecognized names fall back to whole-text chunking.
    #[arg(long, default_value = "whitespace")]
    policy: String,

    /// Do not lowercase text.
    #[arg(long)]
    no_lowercase: bool,

    /// Strip accents (decompose and drop combining marks).
    #[arg(long)]
    strip_accents: bool,

    /// Sequence-start token.
    #[arg(long)]
    cls: Option<String>,

    /// Sequence-end token.
    #[arg(long)]
    sep: Option<String>,

    /// Padding token.
    #[arg(long)]
    pad: Option<String>,

    /// Unknown token.
    #[arg(long)]
    unk: Option<String>,

    /// Mask token.
    #[arg(long)]
    mask: Option<String>,
}

impl PipelineArgs {
    /// Build the config update these args describe.
    pub fn config_update(&self) -> Result<ConfigUpdate, Box<dyn std::error::Error>> {
        let mut update = ConfigUpdate::default()
            .with_model_family(ModelFamily::from_name(&self.family)?)
            .with_chunk_policy(ChunkPolicy::from_name_lossy(&self.policy))
            .with_lowercase(!self.no_lowercase)
            .with_strip_accents(self.strip_accents);

        let specials = &mut update.special_tokens;
        specials.cls.clone_from(&self.cls);
        specials.sep.clone_from(&self.sep);
        specials.pad.clone_from(&self.pad);
        specials.unk.clone_from(&self.unk);
        specials.mask.clone_from(&self.mask);

        Ok(update)
    }

    /// Build the pipeline config.
    pub fn config(&self) -> Result<PipelineConfig, Box<dyn std::error::Error>> {
        Ok(PipelineConfig::default().updated(&self.config_update()?))
    }
}

/// Vocabulary source arg group.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct VocabSourceArgs {
    /// Generate the vocabulary from this sample text file; "-" for stdin.
    #[arg(long)]
    sample_file: Option<String>,

    /// Load the vocabulary from this file, one token per line.
    #[arg(long)]
    vocab_file: Option<String>,
}

impl VocabSourceArgs {
    /// Build a pipeline over `config` and the selected vocabulary.
    pub fn load_pipeline(
        &self,
        config: PipelineConfig,
    ) -> Result<Arc<TokenizerPipeline>, Box<dyn std::error::Error>> {
        if let Some(path) = &self.vocab_file {
            let vocab = Vocabulary::build(
                read_text(path)?
                    .lines()
                    .map(str::trim)
                    .filter(|t| !t.is_empty()),
            );
            log::info!("loaded {} tokens from {path}", vocab.len());
            return Ok(Arc::new(TokenizerPipeline::new(config, vocab)));
        }

        let path = self
            .sample_file
            .as_deref()
            .ok_or("one of --sample-file or --vocab-file is required")?;
        generate_pipeline(config, &read_text(path)?)
    }
}

/// Generate a vocabulary from `sample` with the pretrained reference tokenizer.
pub fn generate_pipeline(
    config: PipelineConfig,
    sample: &str,
) -> Result<Arc<TokenizerPipeline>, Box<dyn std::error::Error>> {
    let session = TokenizerSession::default().with_config(config);
    let vocab = session.generate_vocabulary(sample)?;
    log::info!("generated {} tokens", vocab.len());
    Ok(session.snapshot())
}
