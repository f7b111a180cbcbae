use std::io::Write;

use tokcraft::assembly::TokenizationResult;

use crate::{
    input_output::{InputArgs, OutputArgs, input_lines},
    logging::LogArgs,
    pipeline_args::{PipelineArgs, VocabSourceArgs},
};

/// Args for the tokenize command.
#[derive(clap::Args, Debug)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pipeline: PipelineArgs,

    #[command(flatten)]
    vocab_source: VocabSourceArgs,

    /// Print each result as a JSON object.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,

    /// Text to tokenize; when absent, each input line is tokenized.
    text: Vec<String>,
}

impl TokenizeArgs {
    /// Run the tokenize command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let pipeline = self.vocab_source.load_pipeline(self.pipeline.config()?)?;
        let lines = input_lines(&self.text, &self.input)?;
        let mut writer = self.output.open_writer()?;

        let results = pipeline.tokenize_batch(&lines[..]);

        for (line, result) in lines.iter().zip(results) {
            match result {
                Some(result) if self.json => {
                    writeln!(writer, "{}", serde_json::to_string(&result)?)?;
                }
                Some(result) => write_result(&mut writer, &result)?,
                None if self.json => writeln!(writer, "null")?,
                None => {
                    log::warn!("not tokenizable: {line:?}");
                    writeln!(writer)?;
                }
            }
        }
        writer.flush()?;

        Ok(())
    }
}

fn write_result(
    writer: &mut dyn Write,
    result: &TokenizationResult,
) -> Result<(), Box<dyn std::error::Error>> {
    let ids: Vec<String> = result.token_ids.iter().map(u32::to_string).collect();

    writeln!(writer, "tokens: {}", result.tokens.join(" "))?;
    writeln!(writer, "ids:    {}", ids.join(" "))?;
    writeln!(
        writer,
        "stats:  {} chars, {} tokens, {:.1}% compression",
        result.stats.input_length, result.stats.token_count, result.stats.compression_ratio
    )?;
    Ok(())
}
