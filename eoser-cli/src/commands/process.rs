//! Process command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use eoser_core::{Sentence, SentenceExtractor};
use rayon::prelude::*;

use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;
use crate::symbol_source::SymbolSource;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Language of the built-in symbol table
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Variant of the built-in table (zenkaku, zenkaku2 or hankaku for ja)
    #[arg(long, value_name = "VARIANT")]
    pub variant: Option<String>,

    /// Symbol configuration file overriding built-in symbols
    #[arg(short, long, value_name = "FILE")]
    pub symbol_config: Option<PathBuf>,

    /// Settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Extract files in parallel
    #[arg(short, long)]
    pub parallel: bool,
}

/// Sentences extracted from one input
#[derive(Debug)]
struct ProcessedFile {
    source: PathBuf,
    sentences: Vec<Sentence>,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Starting text processing");

        let settings = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let source = self.symbol_source(&settings);
        log::info!("Using symbols: {}", source.display_name());
        let extractor = SentenceExtractor::new(source.build_table()?)
            .context("Symbol table cannot drive sentence extraction")?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} input(s) to process", files.len());

        let progress = ProgressReporter::new(files.len(), quiet || files.len() < 2);
        let extract = |path: &PathBuf| -> Result<ProcessedFile> {
            let processed = process_file(&extractor, path)?;
            progress.file_completed(&path.display().to_string(), processed.sentences.len());
            Ok(processed)
        };

        let parallel = self.parallel || settings.processing.parallel;
        let processed: Vec<ProcessedFile> = if parallel && files.len() > 1 {
            log::debug!("Extracting {} files in parallel", files.len());
            files.par_iter().map(extract).collect::<Result<_>>()?
        } else {
            files.iter().map(extract).collect::<Result<_>>()?
        };
        progress.finish();

        let format = self.format.unwrap_or(settings.output.format);
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(format, writer, settings.output.pretty_json);
        let mut total = 0;
        for file in &processed {
            for sentence in &file.sentences {
                formatter.format_sentence(&file.source, sentence)?;
            }
            total += file.sentences.len();
        }
        formatter.finish()?;

        log::info!(
            "Extracted {total} sentences from {} input(s)",
            processed.len()
        );
        Ok(())
    }

    /// Flags win over the settings file
    fn symbol_source(&self, settings: &CliConfig) -> SymbolSource {
        let variant = self
            .variant
            .clone()
            .or_else(|| settings.processing.variant.clone());

        match self
            .symbol_config
            .clone()
            .or_else(|| settings.processing.symbol_config.clone())
        {
            Some(path) => SymbolSource::External {
                path,
                language: self.language.clone(),
                variant,
            },
            None => SymbolSource::BuiltIn {
                language: self
                    .language
                    .clone()
                    .unwrap_or_else(|| settings.processing.language.clone()),
                variant,
            },
        }
    }
}

fn process_file(extractor: &SentenceExtractor, path: &Path) -> Result<ProcessedFile> {
    let text = FileReader::read_text(path)?;
    let extraction = extractor.extract(&text);
    let sentences = Sentence::from_extraction(&text, &extraction);

    log::debug!(
        "{}: {} sentences, consumed {} of {} bytes",
        path.display(),
        sentences.len(),
        extraction.last_position,
        text.len()
    );

    Ok(ProcessedFile {
        source: path.to_path_buf(),
        sentences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eoser_core::SymbolTable;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: &str) -> ProcessArgs {
        ProcessArgs {
            input: vec![input.to_string()],
            output: None,
            format: None,
            language: None,
            variant: None,
            symbol_config: None,
            config: None,
            parallel: false,
        }
    }

    #[test]
    fn test_process_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "First one.\nSecond one. Tail").unwrap();

        let extractor = SentenceExtractor::new(SymbolTable::english().unwrap()).unwrap();
        let processed = process_file(&extractor, &path).unwrap();

        let lines: Vec<usize> = processed.sentences.iter().map(|s| s.line_number).collect();
        assert_eq!(lines, vec![1, 2, 2]);
        assert_eq!(processed.sentences[2].content, " Tail");
    }

    #[test]
    fn test_builtin_source_defaults_to_english() {
        let source = args("a.txt").symbol_source(&CliConfig::default());
        assert_eq!(
            source,
            SymbolSource::BuiltIn {
                language: "en".to_string(),
                variant: None,
            }
        );
    }

    #[test]
    fn test_flags_override_settings() {
        let mut settings = CliConfig::default();
        settings.processing.language = "ja".to_string();
        settings.processing.variant = Some("zenkaku2".to_string());

        let mut process = args("a.txt");
        process.variant = Some("hankaku".to_string());

        assert_eq!(
            process.symbol_source(&settings),
            SymbolSource::BuiltIn {
                language: "ja".to_string(),
                variant: Some("hankaku".to_string()),
            }
        );
    }

    #[test]
    fn test_symbol_config_selects_external_source() {
        let mut settings = CliConfig::default();
        settings.processing.symbol_config = Some(PathBuf::from("/tmp/symbols.toml"));

        let mut process = args("a.txt");
        process.language = Some("ja".to_string());

        assert_eq!(
            process.symbol_source(&settings),
            SymbolSource::External {
                path: PathBuf::from("/tmp/symbols.toml"),
                language: Some("ja".to_string()),
                variant: None,
            }
        );
    }

    #[test]
    fn test_execute_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("doc.txt");
        let output = dir.path().join("out.md");
        fs::write(&input, "One. Two.").unwrap();

        let mut process = args(&input.to_string_lossy());
        process.output = Some(output.clone());
        process.format = Some(OutputFormat::Markdown);
        process.execute(true).unwrap();

        let written = fs::read_to_string(output).unwrap();
        assert!(written.starts_with("1. One.\n2. Two.\n"));
        assert!(written.contains("*Total sentences: 2*"));
    }
}
