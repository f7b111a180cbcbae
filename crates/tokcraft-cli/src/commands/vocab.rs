use std::io::Write;

use crate::{
    input_output::{OutputArgs, read_text},
    logging::LogArgs,
    pipeline_args::{PipelineArgs, generate_pipeline},
};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[command(flatten)]
    pipeline: PipelineArgs,

    /// Sample text file; "-" for stdin.
    #[arg(long)]
    sample_file: String,

    /// Maximum number of tokens to list.
    #[arg(long, default_value_t = 50)]
    limit: usize,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl VocabArgs {
    /// Run the vocab command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let sample = read_text(&self.sample_file)?;
        let pipeline = generate_pipeline(self.pipeline.config()?, &sample)?;
        let vocab = pipeline.vocab();

        let mut writer = self.output.open_writer()?;
        writeln!(writer, "# {} tokens", vocab.len())?;

        let preview = vocab.preview(self.limit);
        for (id, token) in vocab.iter().take(preview.head.len()) {
            writeln!(writer, "{id}\t{token}")?;
        }
        if preview.remaining > 0 {
            writeln!(writer, "# +{} more", preview.remaining)?;
        }
        writer.flush()?;

        Ok(())
    }
}
