//! Generate config command implementation

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use eoser_core::{SymbolConfiguration, SymbolTable, VERSION};

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language whose built-in table is written out
    #[arg(short, long, value_name = "LANG", default_value = "en")]
    pub language: String,

    /// Variant of the built-in table
    #[arg(long, value_name = "VARIANT")]
    pub variant: Option<String>,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating symbol configuration...");
        println!("  Language: {}", self.language);
        println!("  Output file: {}", self.output.display());

        let document = self.render()?;
        fs::write(&self.output, document)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Symbol configuration generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit or delete the symbols you want to change");
        println!("2. Validate your configuration:");
        println!("   eoser validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   eoser process -i input.txt -s {}",
            self.output.display()
        );

        Ok(())
    }

    fn render(&self) -> Result<String> {
        let table = SymbolTable::new(&self.language, self.variant.as_deref(), Vec::new())?;
        let body = SymbolConfiguration::from_table(&table).to_toml_string()?;

        let mut header = format!("# Symbol configuration for {}", table.language());
        if let Some(variant) = table.variant() {
            header.push_str(&format!(" ({variant})"));
        }
        Ok(format!("{header}\n# Generated by eoser {VERSION}\n\n{body}"))
    }
}
