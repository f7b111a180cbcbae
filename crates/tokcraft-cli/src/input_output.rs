use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Read},
};

fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn std::io::Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Read a whole file; "-" reads stdin.
pub fn read_text(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut text = String::new();
    match squash_standard_io(&Some(path.to_string())) {
        None => {
            std::io::stdin().lock().read_to_string(&mut text)?;
        }
        Some(p) => {
            File::open(p)?.read_to_string(&mut text)?;
        }
    }
    Ok(text)
}

/// Yield the input lines to process.
///
/// Positional `text` words, when present, form a single line;
/// otherwise lines are read from `input`.
pub fn input_lines(
    text: &[String],
    input: &InputArgs,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    if !text.is_empty() {
        return Ok(vec![text.join(" ")]);
    }
    Ok(input.open_reader()?.lines().collect::<Result<_, _>>()?)
}
