//! unrun CLI - WordprocessingML run decoding tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use unrun::{parse_file_with_options, ContentChild, DecodeOptions, Decoded, JsonFormat, Run};

#[derive(Parser)]
#[command(name = "unrun")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Decode WordprocessingML runs to JSON and text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode runs to JSON
    Json {
        /// Input markup file (e.g., an extracted word/document.xml)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Fail on malformed run content instead of dropping it
        #[arg(long)]
        strict: bool,

        /// Keep unrecognized run children as raw elements
        #[arg(long)]
        keep_unknown: bool,
    },

    /// Extract plain text from runs
    Text {
        /// Input markup file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show a summary of the runs in a file
    Info {
        /// Input markup file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Json {
            input,
            output,
            compact,
            strict,
            keep_unknown,
        } => cmd_json(&input, output.as_deref(), compact, strict, keep_unknown),
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Info { input } => cmd_info(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn report_diagnostics(decoded: &Decoded<Vec<Run>>) {
    log::info!(
        "Decoded {} runs with {} diagnostics",
        decoded.value.len(),
        decoded.diagnostics.len()
    );
    for diagnostic in &decoded.diagnostics {
        eprintln!("{}: {}", "Warning".yellow().bold(), diagnostic);
    }
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    strict: bool,
    keep_unknown: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = DecodeOptions::new().with_unrecognized(keep_unknown);
    if strict {
        options = options.strict();
    }

    let decoded = parse_file_with_options(input, options)?;
    report_diagnostics(&decoded);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = unrun::render::to_json(&decoded.value, format)?;
    write_output(output, &json)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let decoded = parse_file_with_options(input, DecodeOptions::default())?;
    report_diagnostics(&decoded);

    let text = unrun::render::to_text(&decoded.value);
    write_output(output, &text)
}

/// Counts shown by `unrun info`.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    runs: usize,
    text_chars: usize,
    tabs: usize,
    drawings: usize,
    field_instructions: usize,
    with_properties: usize,
}

impl Summary {
    fn from_runs(runs: &[Run]) -> Self {
        let mut summary = Summary {
            runs: runs.len(),
            ..Default::default()
        };
        for run in runs {
            if run.properties.is_some() {
                summary.with_properties += 1;
            }
            if run.field_instruction.is_some() {
                summary.field_instructions += 1;
            }
            for child in &run.children {
                match child {
                    ContentChild::TextSpan(text) => summary.text_chars += text.chars().count(),
                    ContentChild::Tab => summary.tabs += 1,
                    ContentChild::EmbeddedObject(_) => summary.drawings += 1,
                    ContentChild::Unrecognized(_) => {}
                }
            }
        }
        summary
    }
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = unrun::detect_format_from_path(input)?;
    let decoded = parse_file_with_options(input, DecodeOptions::default())?;
    let summary = Summary::from_runs(&decoded.value);

    println!("{}", "Run Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Runs".bold(), summary.runs);
    println!("{}: {}", "Characters".bold(), summary.text_chars);
    println!("{}: {}", "Tabs".bold(), summary.tabs);
    println!("{}: {}", "Drawings".bold(), summary.drawings);
    println!("{}: {}", "Field instructions".bold(), summary.field_instructions);
    println!("{}: {}", "Runs with properties".bold(), summary.with_properties);

    if decoded.has_diagnostics() {
        println!();
        println!("{}", "Diagnostics".yellow().bold());
        for diagnostic in &decoded.diagnostics {
            println!("  {}", diagnostic);
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unrun".cyan().bold(), env!("CARGO_PKG_VERSION"));
}
