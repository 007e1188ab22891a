//! Command implementations for the CLI

use anyhow::Result;
use clap::{Args, Subcommand};
use eoser_core::{SymbolRole, SymbolTable, LANGUAGES};

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into sentences
    Process(process::ProcessArgs),

    /// List available languages, formats or symbols
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a symbol configuration file
    Validate(validate::ValidateArgs),

    /// Write a built-in symbol table as a configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in languages and their variants
    Languages,

    /// List supported output formats
    Formats,

    /// Show the symbol table of a language
    Symbols(SymbolsArgs),
}

/// Arguments for `list symbols`
#[derive(Debug, Args)]
pub struct SymbolsArgs {
    /// Language code
    #[arg(short, long, default_value = "en", value_name = "LANG")]
    pub language: String,

    /// Table variant
    #[arg(long, value_name = "VARIANT")]
    pub variant: Option<String>,
}

impl Commands {
    /// Execute the command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(quiet),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                println!("Built-in languages:");
                for info in LANGUAGES {
                    if info.variants.is_empty() {
                        println!("  {:<4}{}", info.code, info.name);
                    } else {
                        println!(
                            "  {:<4}{} (variants: {})",
                            info.code,
                            info.name,
                            info.variants.join(", ")
                        );
                    }
                }
            }
            ListCommands::Formats => {
                println!("Supported output formats:");
                println!("  text      - One sentence per line");
                println!("  json      - JSON array with file, line and offset");
                println!("  markdown  - Numbered list with a total");
            }
            ListCommands::Symbols(args) => {
                let table = SymbolTable::new(&args.language, args.variant.as_deref(), Vec::new())?;
                print!("{}", render_symbols(&table));
            }
        }
        Ok(())
    }
}

fn render_symbols(table: &SymbolTable) -> String {
    let mut out = format!(
        "Symbols for {}{}:\n",
        table.language(),
        table
            .variant()
            .map(|v| format!(" ({v})"))
            .unwrap_or_default()
    );
    out.push_str(&format!(
        "  {:<32} {:<6} {:<7} {:<6} {}\n",
        "ROLE", "VALUE", "BEFORE", "AFTER", "INVALID"
    ));

    for role in SymbolRole::ALL {
        let Ok(symbol) = table.get(role) else {
            continue;
        };
        let invalid: String = symbol.invalid_chars().iter().collect();
        out.push_str(&format!(
            "  {:<32} {:<6} {:<7} {:<6} {}\n",
            role.name(),
            symbol.value(),
            symbol.needs_before_space(),
            symbol.needs_after_space(),
            invalid
        ));
    }
    out
}
