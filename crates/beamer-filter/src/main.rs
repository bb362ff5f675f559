/*
 * main.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! beamer-filter - pandoc JSON filter entry point
//!
//! Pandoc runs JSON filters with the output format as the only argument:
//!
//! ```sh
//! pandoc --filter beamer-filter -t beamer slides.rst -o slides.pdf
//! ```

use anyhow::{Context, Result};
use beamer_filter::logging;
use beamer_filter::{BeamerRewriter, Environment, FilterConfig, filter_json};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "beamer-filter")]
#[command(version, about = "Pandoc JSON filter for beamer slide decks", long_about = None)]
struct Args {
    /// Output format pandoc is writing
    #[arg(default_value = "html")]
    target_format: String,

    /// Read pandoc JSON from FILE ('-' for stdin)
    #[arg(short = 'i', long = "input", default_value = "-")]
    input: String,

    /// Write pandoc JSON to FILE ('-' for stdout)
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: String,

    /// YAML configuration file
    #[arg(short = 'c', long = "config", env = "BEAMER_FILTER_CONFIG")]
    config: Option<PathBuf>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,
}

fn open_input(path: &str) -> Result<Box<dyn Read>> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).with_context(|| format!("Failed to open input file {}", path))?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_output(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let file =
        File::create(path).with_context(|| format!("Failed to create output file {}", path))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => FilterConfig::load(path)?,
        None => FilterConfig::default(),
    };

    if args.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    logging::init(config.debug_log.as_deref());

    let env = Environment::capture(&config);
    tracing::debug!(
        format = %args.target_format,
        instructor = env.instructor,
        search_path = ?env.search_path,
        "starting filter"
    );
    let rewriter = BeamerRewriter::new(config, env);

    let mut input = open_input(&args.input)?;
    let mut output = open_output(&args.output)?;
    let diagnostics = filter_json(&mut input, &mut output, &args.target_format, &rewriter)?;

    logging::report_diagnostics(&diagnostics);
    Ok(())
}
