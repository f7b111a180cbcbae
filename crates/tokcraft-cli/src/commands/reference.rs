use std::io::Write;

use tokcraft::{TokenizerSession, config::ModelFamily};

use crate::{
    input_output::{InputArgs, OutputArgs, input_lines},
    logging::LogArgs,
};

/// Args for the reference command.
#[derive(clap::Args, Debug)]
pub struct ReferenceArgs {
    /// Pretrained model id; defaults to the reference for `--family`.
    #[arg(long)]
    model: Option<String>,

    /// Model family whose reference tokenizer to use.
    #[arg(long, default_value = "wordpiece")]
    family: String,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,

    /// Text to split; when absent, each input line is split.
    text: Vec<String>,
}

impl ReferenceArgs {
    /// Resolve the model id.
    pub fn model_id(&self) -> Result<String, Box<dyn std::error::Error>> {
        Ok(match &self.model {
            Some(model) => model.clone(),
            None => ModelFamily::from_name(&self.family)?
                .reference_model_id()
                .to_string(),
        })
    }

    /// Run the reference command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let model_id = self.model_id()?;
        let session = TokenizerSession::default();
        let mut writer = self.output.open_writer()?;

        for line in input_lines(&self.text, &self.input)? {
            let pieces = session.reference_tokenize(&model_id, &line)?;
            writeln!(writer, "{}", pieces.join(" "))?;
        }
        writer.flush()?;

        Ok(())
    }
}
