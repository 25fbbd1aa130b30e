//! Gridjson CLI - convert ASCII grid tables to JSON

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use gridjson::{table_to_mapping, table_to_records, ExtractResult};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "g2j")]
#[command(version)]
#[command(about = "Gridjson - convert ASCII grid tables (prettytable / reStructuredText style) to JSON", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output shape
    #[arg(short, long, value_enum, default_value_t = Mode::Records)]
    mode: Mode,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Pretty print the JSON output
    #[arg(short, long)]
    pretty: bool,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// One JSON object per body row, keyed by the header fields
    Records,
    /// A single flat JSON object from a two-column table
    Mapping,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let json = match convert(&input, cli.mode, cli.pretty) {
        Ok(json) => json,
        Err(err) => {
            // No partial JSON on stdout; diagnostic goes to stderr
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    // Output
    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", json)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn convert(input: &str, mode: Mode, pretty: bool) -> ExtractResult<String> {
    let to_io = |e: serde_json::Error| gridjson::ExtractError::Io {
        message: e.to_string(),
    };
    match mode {
        Mode::Records => {
            let records = table_to_records(input)?;
            if pretty {
                serde_json::to_string_pretty(&records).map_err(to_io)
            } else {
                serde_json::to_string(&records).map_err(to_io)
            }
        }
        Mode::Mapping => {
            let mapping = table_to_mapping(input)?;
            if pretty {
                serde_json::to_string_pretty(&mapping).map_err(to_io)
            } else {
                serde_json::to_string(&mapping).map_err(to_io)
            }
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install gridjson --features cli");
    eprintln!("  g2j [OPTIONS] [INPUT_FILE]");
}
