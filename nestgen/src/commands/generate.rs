use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use nestgen_codegen::{BuiltinTemplates, DtoGenerator, EmitPolicy};
use nestgen_core::Indent;
use nestgen_model::ModelFile;

use super::UnwrapOrExit;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum IndentArg {
    /// 2-space indentation
    #[value(name = "2")]
    Two,
    /// 4-space indentation
    #[default]
    #[value(name = "4")]
    Four,
    /// Tab indentation
    #[value(name = "tab")]
    Tab,
}

impl From<IndentArg> for Indent {
    fn from(arg: IndentArg) -> Self {
        match arg {
            IndentArg::Two => Indent::SPACE_2,
            IndentArg::Four => Indent::SPACE_4,
            IndentArg::Tab => Indent::TAB,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum PolicyArg {
    /// Rewrite referenced type names with the Dto suffix
    #[default]
    Suffixed,
    /// Render only all-of and interface models, as-is
    Plain,
}

impl From<PolicyArg> for EmitPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Suffixed => EmitPolicy::Suffixed,
            PolicyArg::Plain => EmitPolicy::Plain,
        }
    }
}

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the model description (defaults to ./models.json)
    #[arg(short, long, default_value = "models.json")]
    pub models: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Indentation for generated files
    #[arg(long, value_enum, default_value_t = IndentArg::Four)]
    pub indent: IndentArg,

    /// Emission policy
    #[arg(long, value_enum, default_value_t = PolicyArg::Suffixed)]
    pub policy: PolicyArg,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = ModelFile::open(&self.models).unwrap_or_exit();

        let templates = BuiltinTemplates;
        let generator = DtoGenerator::new(file.models(), &templates)
            .with_indent(self.indent.into())
            .with_policy(self.policy.into());

        if self.dry_run {
            self.run_preview(&generator)
        } else {
            self.run_generation(&generator)
        }
    }

    fn run_generation(&self, generator: &DtoGenerator) -> Result<()> {
        let result = generator
            .generate(&self.output)
            .wrap_err("Failed to generate DTO files")?;

        println!(
            "Generated {} file(s) into {}",
            result.written.len(),
            self.output.display()
        );
        for file in &result.written {
            println!("  + {}", file);
        }

        Ok(())
    }

    fn run_preview(&self, generator: &DtoGenerator) -> Result<()> {
        let files = generator.preview()?;

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
