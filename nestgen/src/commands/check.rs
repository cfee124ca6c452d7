use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use nestgen_model::ModelFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the model description (defaults to ./models.json)
    #[arg(short, long, default_value = "models.json")]
    pub models: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = ModelFile::open(&self.models).unwrap_or_exit();

        println!(
            "{}: {} model(s) OK",
            file.filename(),
            file.models().len()
        );

        Ok(())
    }
}
