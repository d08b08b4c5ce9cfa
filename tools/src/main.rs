use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::Pattern;
use spacewar_tools::{decode_packet_json, format_decode_pretty, inspect_packet, InspectReport};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wire::DecodeOptions;

#[derive(Parser)]
#[command(
    name = "spacewar-tools",
    version,
    about = "spacewar message inspection and decoding tools"
)]
struct Cli {
    /// Log decoder diagnostics at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect message discriminators and sizes.
    Inspect {
        /// Path to a captured message, or a directory of them.
        packet_path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected messages.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected messages (after sorting).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Decode a captured message into structured output.
    Decode {
        /// Path to the message bytes.
        packet_file: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
        /// Accept unterminated strings and skip unknown message types.
        #[arg(long)]
        lenient: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Inspect {
            packet_path,
            glob,
            sort,
            limit,
        } => {
            if packet_path.is_dir() {
                let entries = collect_packet_entries(&packet_path, glob.as_deref())?;
                let mut entries = maybe_sort_entries(entries, sort);
                let limit = limit.or(sort.map(|InspectSort::Size| 10));
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                for entry in entries {
                    let bytes = fs::read(&entry.path)
                        .with_context(|| format!("read packet {}", entry.path.display()))?;
                    println!("== {} ({} bytes) ==", entry.path.display(), entry.size);
                    match inspect_packet(&bytes) {
                        Ok(report) => print_inspect_report(&report),
                        Err(err) => {
                            tracing::warn!(path = %entry.path.display(), error = %err, "skipping");
                        }
                    }
                }
            } else {
                let bytes = fs::read(&packet_path)
                    .with_context(|| format!("read packet {}", packet_path.display()))?;
                let report = inspect_packet(&bytes)?;
                print_inspect_report(&report);
            }
        }
        Command::Decode {
            packet_file,
            format,
            lenient,
        } => {
            let bytes = fs::read(&packet_file)
                .with_context(|| format!("read packet {}", packet_file.display()))?;
            let options = if lenient {
                DecodeOptions::lenient()
            } else {
                DecodeOptions::strict()
            };
            tracing::debug!(path = %packet_file.display(), len = bytes.len(), "decoding");
            let output = decode_packet_json(&bytes, &options)?;
            match format {
                DecodeFormat::Json => {
                    let json = serde_json::to_string_pretty(&output).context("serialize json")?;
                    println!("{json}");
                }
                DecodeFormat::Pretty => {
                    println!("{}", format_decode_pretty(&output));
                }
            }
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

struct PacketEntry {
    path: PathBuf,
    size: u64,
}

fn collect_packet_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<PacketEntry>> {
    let mut entries = Vec::new();
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push(PacketEntry { path, size });
    }
    Ok(entries)
}

fn maybe_sort_entries(
    mut entries: Vec<PacketEntry>,
    sort: Option<InspectSort>,
) -> Vec<PacketEntry> {
    match sort {
        Some(InspectSort::Size) => {
            entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
        }
        None => {}
    }
    entries
}

fn print_inspect_report(report: &InspectReport) {
    let name = report
        .message_type
        .map_or_else(|| "unknown".to_string(), |message_type| message_type.to_string());
    println!(
        "discriminator: {} ({name}) family: {:?}",
        report.discriminator, report.family
    );
    match report.expected_size {
        Some(expected) if report.size_ok() => println!("size: {expected} bytes (ok)"),
        Some(expected) => println!("size: {} bytes, expected {expected} (mismatch)", report.len),
        None => println!("size: {} bytes (no layout for this discriminator)", report.len),
    }
}
