use strum::IntoEnumIterator;
use tokcraft::config::ModelFamily;

/// Args for the families command.
#[derive(clap::Args, Debug)]
pub struct FamiliesArgs {}

impl FamiliesArgs {
    /// Run the families command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        for family in ModelFamily::iter() {
            let name = family.to_string();
            println!("{name:<14} \"{}\"", family.reference_model_id());
        }
        Ok(())
    }
}
