// metaphone-cli: argument model and shared helpers for the double-metaphone tool.

use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use metaphone::{Codes, DEFAULT_MAX_CODE_LENGTH, DoubleMetaphone, EncoderOptions};
use serde::Serialize;

/// Compute Double Metaphone codes for words.
///
/// If WORD arguments are given, encodes each word. Otherwise reads words from
/// stdin (one per line, blank lines skipped).
#[derive(Debug, Parser)]
#[command(name = "double-metaphone", version)]
pub struct Args {
    /// Words to encode
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Maximum number of symbols per code
    #[arg(short = 'm', long, value_name = "N", default_value_t = DEFAULT_MAX_CODE_LENGTH)]
    pub max_length: usize,

    /// Print "match" if the two words share a code, "no match" otherwise
    #[arg(long, num_args = 2, value_names = ["A", "B"], conflicts_with = "words")]
    pub compare: Option<Vec<String>>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `word PRIMARY [SECONDARY]`
    Text,
    /// One JSON object per line
    Json,
    /// `word<TAB>PRIMARY<TAB>SECONDARY`, empty when absent
    Tsv,
}

#[derive(Serialize)]
struct Row<'a> {
    word: &'a str,
    #[serde(flatten)]
    codes: &'a Codes,
}

impl Args {
    /// Encoder configured from the command-line options.
    pub fn encoder(&self) -> DoubleMetaphone {
        DoubleMetaphone::with_options(EncoderOptions {
            max_code_length: self.max_length,
        })
    }

    /// Install `env_logger` with a filter derived from `-v`, unless `-q`.
    /// `RUST_LOG` overrides the default.
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
            .try_init();
    }
}

/// Run the tool: compare two words, or encode every word from the arguments
/// or from `input`.
pub fn run(args: &Args, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let encoder = args.encoder();
    log::info!("max code length {}", encoder.options().max_code_length);

    if let Some([a, b]) = args.compare.as_deref() {
        let verdict = if encoder.sounds_like(a, b) { "match" } else { "no match" };
        log::debug!("compare {a:?} {b:?}: {verdict}");
        writeln!(out, "{verdict}")?;
        return Ok(());
    }

    let words = if args.words.is_empty() {
        read_words(input).context("failed to read words from stdin")?
    } else {
        args.words.clone()
    };

    for word in &words {
        let codes = encoder
            .encode(word)
            .with_context(|| format!("failed to encode {word:?}"))?;
        writeln!(out, "{}", format_codes(word, &codes, args.format)?)?;
    }
    out.flush()?;
    Ok(())
}

/// Render one result line (without the trailing newline).
pub fn format_codes(word: &str, codes: &Codes, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => match codes.secondary() {
            Some(secondary) => format!("{word} {} {secondary}", codes.primary()),
            None => format!("{word} {}", codes.primary()),
        },
        OutputFormat::Tsv => format!(
            "{word}\t{}\t{}",
            codes.primary(),
            codes.secondary().unwrap_or_default()
        ),
        OutputFormat::Json => serde_json::to_string(&Row { word, codes })?,
    })
}

/// Collect the trimmed, non-empty lines of `input`.
pub fn read_words(input: impl BufRead) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in input.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
