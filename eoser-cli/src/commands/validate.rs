//! Validate command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use eoser_core::{ConfigurationLoader, SentenceExtractor, SymbolTable};

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the symbol configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub symbol_config: PathBuf,

    /// Variant of the built-in table the overrides apply to
    #[arg(long, value_name = "VARIANT")]
    pub variant: Option<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating symbol configuration: {}",
            self.symbol_config.display()
        );

        match self.check() {
            Ok((table, overrides)) => {
                println!("✓ Configuration is valid!");
                println!("  Language: {}", table.language());
                if let Some(variant) = table.variant() {
                    println!("  Variant: {variant}");
                }
                println!("  Overridden symbols: {overrides}");
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(CliError::ConfigError(format!("validation failed: {e}")).into())
            }
        }
    }

    /// Load the file, build its table and make sure it can drive extraction
    fn check(&self) -> eoser_core::Result<(SymbolTable, usize)> {
        let config = ConfigurationLoader::load_file(&self.symbol_config)?;
        let table = SymbolTable::from_configuration(&config, self.variant.as_deref())?;
        SentenceExtractor::new(table.clone())?;
        Ok((table, config.symbols.len()))
    }
}
