use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use nestgen_model::ModelFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to the model description (defaults to ./models.json)
    #[arg(short, long, default_value = "models.json")]
    pub models: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let file = ModelFile::open(&self.models).unwrap_or_exit();

        if file.models().is_empty() {
            println!("No models defined");
            return Ok(());
        }

        println!("Models:");
        for model in file.models() {
            if model.properties.is_empty() {
                println!("  {} ({})", model.name, model.export.as_str());
            } else {
                println!(
                    "  {} ({}, {} properties)",
                    model.name,
                    model.export.as_str(),
                    model.properties.len()
                );
            }
        }

        Ok(())
    }
}
