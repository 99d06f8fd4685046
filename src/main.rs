//! Concept Atlas CLI
//!
//! Usage:
//!   concept-atlas [OPTIONS] [FILE]
//!
//! Reads a map as JSON from FILE (or stdin), runs the requested layout
//! pass, and writes the positioned map as JSON to stdout.
//!
//! Options:
//!   -m, --mode <place|pack>  Layout pass to run
//!   -p, --profile <FILE>     Layout constant overrides (TOML format)
//!   --pretty                 Pretty-print the output JSON
//!   -r, --report             Print clamp diagnostics to stderr
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use concept_atlas::{
    layout_generated, layout_map, GeneratedMap, KnowledgeMap, LayoutConfig, LayoutProfile,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Depth tiers on Y, grouped placement on X (existing maps)
    Place,
    /// Size and grid territories, pack members into them (generated maps)
    Pack,
}

#[derive(Parser)]
#[command(name = "concept-atlas")]
#[command(about = "Layout engine for knowledge maps")]
struct Cli {
    /// Input map JSON (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Layout pass to run
    #[arg(short, long, value_enum, default_value = "place")]
    mode: Mode,

    /// Layout profile overriding spacing/sizing constants (TOML format)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,

    /// Print clamp diagnostics to stderr
    #[arg(short, long)]
    report: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load profile
    let config = match &cli.profile {
        Some(path) => match LayoutProfile::from_file(path) {
            Ok(profile) => profile.layout,
            Err(e) => {
                eprintln!("Error loading profile '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => LayoutConfig::default(),
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let placed = match cli.mode {
        Mode::Place => {
            let mut map: KnowledgeMap = match serde_json::from_str(&source) {
                Ok(map) => map,
                Err(e) => {
                    eprintln!("Error parsing map JSON: {}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = layout_map(&mut map, &config) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            map
        }
        Mode::Pack => {
            let map: GeneratedMap = match serde_json::from_str(&source) {
                Ok(map) => map,
                Err(e) => {
                    eprintln!("Error parsing generated map JSON: {}", e);
                    std::process::exit(1);
                }
            };
            match layout_generated(map, &config) {
                Ok((map, diagnostics)) => {
                    if cli.report {
                        for event in &diagnostics.clamp_events {
                            eprintln!(
                                "clamped: node '{}' in territory '{}' ({:.1},{:.1}) -> ({:.1},{:.1})",
                                event.node_id,
                                event.territory_id,
                                event.requested.x,
                                event.requested.y,
                                event.applied.x,
                                event.applied.y,
                            );
                        }
                    }
                    map
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&placed)
    } else {
        serde_json::to_string(&placed)
    };
    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing map: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Concept Atlas - layout engine for knowledge maps

USAGE:
    concept-atlas [OPTIONS] [FILE]
    cat map.json | concept-atlas

OPTIONS:
    -m, --mode <place|pack>  Layout pass: place (depth tiers) or pack (territory grid)
    -p, --profile <FILE>     Layout constant overrides (TOML)
    --pretty                 Pretty-print output JSON
    -r, --report             Print clamp diagnostics to stderr
    -h, --help               Print help

QUICK START:
    echo '{{"nodes":[{{"id":"a","label":"A"}},{{"id":"b","label":"B"}}],
           "edges":[{{"id":"e","source":"a","target":"b","type":"dependency"}}]}}' \
        | concept-atlas --pretty

This places B one tier below A and prints the positioned map."#
    );
}
