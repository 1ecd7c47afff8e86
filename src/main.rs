use std::fs;
use std::path::PathBuf;

use astro2hatena::{Config, Warning};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "astro2hatena")]
#[command(about = "Convert Astro-flavored Markdown posts into Hatena Blog Markdown")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file; defaults are used when it does not exist
    #[arg(short, long, default_value = "astro2hatena.toml")]
    config: PathBuf,

    /// Print each detected math span along with the math warning
    #[arg(long)]
    list_math: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !cli.input.exists() {
        eprintln!("Error: input file '{}' not found", cli.input.display());
        std::process::exit(1);
    }

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let markdown = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let conversion = match astro2hatena::convert_with_config(&markdown, &config) {
        Ok(conversion) => conversion,
        Err(e) => {
            eprintln!("Error: conversion failed: {}", e);
            std::process::exit(1);
        }
    };

    for warning in &conversion.warnings {
        eprintln!("Warning: {}", warning);
        if cli.list_math {
            let Warning::UnsupportedMath { spans } = warning;
            for span in spans {
                eprintln!("  line {}: {}", span.line, span.expression);
            }
        }
    }

    match cli.output {
        Some(output) => {
            if let Err(e) = fs::write(&output, &conversion.document) {
                eprintln!("Error writing {}: {}", output.display(), e);
                std::process::exit(1);
            }
            println!("Converted {}", output.display());
        }
        None => print!("{}", conversion.document),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}
