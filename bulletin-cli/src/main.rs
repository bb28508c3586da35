use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

// Import from pagasa-bulletin-core
use pagasa_bulletin_core::{
    load_gazetteer_file, BulletinAssembler, LocationIndex, ParsingConfig,
};

#[derive(Parser)]
#[command(name = "pagasa-bulletin")]
#[command(about = "Parse PAGASA typhoon bulletin text into structured JSON records")]
struct Args {
    /// Path to the extracted bulletin text file (UTF-8 page text)
    #[arg(short, long)]
    input: String,

    /// Path to the gazetteer JSON file (array of {name, level, island_group})
    #[arg(short, long)]
    gazetteer: String,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Output file path (if not specified, JSON goes to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Suppress progress messages (JSON only)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !args.quiet {
        println!("🌀 PAGASA Bulletin Parser");
    }

    if !Path::new(&args.input).exists() {
        eprintln!("⚠️  Bulletin text not found at: {}", args.input);
        std::process::exit(1);
    }

    let config = ParsingConfig::load_with_fallback(args.config.as_deref());
    if !args.quiet {
        match &args.config {
            Some(path) => println!("📋 Loaded config from: {path}"),
            None => println!("📋 Using default config"),
        }
    }

    let records = load_gazetteer_file(&args.gazetteer)
        .with_context(|| format!("failed to load gazetteer from {}", args.gazetteer))?;
    let index = LocationIndex::new(records);
    if !args.quiet {
        println!("🗺️  Gazetteer loaded: {} place names", index.len());
    }

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read bulletin text from {}", args.input))?;

    if !args.quiet {
        println!("📄 Parsing: {}", args.input);
    }

    let assembler = BulletinAssembler::new(&index, &config);
    let assembled = assembler.assemble(&text);

    for diagnostic in &assembled.diagnostics {
        eprintln!("⚠️  {diagnostic}");
    }

    let json = serde_json::to_string_pretty(&assembled.record)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write output to {path}"))?;
            if !args.quiet {
                println!("✅ Record written to: {path}");
            }
        }
        None => println!("{json}"),
    }

    Ok(())
}
