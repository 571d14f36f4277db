use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use randjson_core::{generate_value, GeneratorConfig};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "randjson")]
#[command(about = "Generate seeded random JSON documents for parser fuzzing")]
#[command(version)]
struct Cli {
    /// PRNG seed (derived from the system clock when omitted)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Number of documents to emit, one per line; document i uses seed + i
    #[arg(short = 'n', long, default_value_t = 1)]
    count: u32,

    /// Maximum nesting depth of containers
    #[arg(long, default_value_t = 5)]
    max_recursion: u32,

    /// Exclusive upper bound on array element count
    #[arg(long, default_value_t = 9)]
    max_array_len: u32,

    /// Exclusive upper bound on generated string length
    #[arg(long, default_value_t = 8)]
    max_string_len: u32,

    /// Exclusive upper bound on per-object key count (must be nonzero)
    #[arg(long, default_value_t = 8)]
    max_keys: u32,

    /// Output file (defaults to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Compact)]
    format: OutputFormat,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    Compact,
    Pretty,
}

/// Fallback seed when none is given, in the spirit of seeding a quick fuzz
/// run from the process clock.
fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON.
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .init();

    let config = GeneratorConfig {
        max_recursion: cli.max_recursion,
        max_array_len: cli.max_array_len,
        max_string_len: cli.max_string_len,
        max_keys: cli.max_keys,
    };

    let seed = cli.seed.unwrap_or_else(clock_seed);
    tracing::debug!(seed, count = cli.count, "starting generation");

    let mut writer: BufWriter<Box<dyn Write>> = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            BufWriter::new(Box::new(file))
        }
        None => BufWriter::new(Box::new(io::stdout().lock())),
    };

    for i in 0..cli.count {
        let value = generate_value(seed.wrapping_add(i), &config)?;
        let text = match cli.format {
            OutputFormat::Compact => value.to_string(),
            OutputFormat::Pretty => {
                serde_json::to_string_pretty(&value).context("Failed to serialize document")?
            }
        };
        writeln!(writer, "{text}").context("Failed to write document")?;
    }
    writer.flush().context("Failed to flush output")?;

    Ok(())
}
