//! `stately-gen`: generates component state modules from JSON spec models.
//!
//! Each spec file holds one serialized `stately_model::SpecModel`. Every
//! model is validated; valid models are rendered to `<component>_state.rs`
//! under the output directory.
//!
//! **Usage:**
//! ```
//! stately-gen [--spec <file>]... [--specs <dir>] [--out <path>] [--check] [-v]...
//! ```
//!
//! Exits non-zero if any model fails to load or validate.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use stately_model::SpecModel;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Generate component state modules from spec models.
#[derive(Parser)]
#[command(
    name = "stately-gen",
    about = "Generate component state modules from JSON spec models"
)]
struct Args {
    /// Spec model file (repeatable).
    #[arg(long = "spec")]
    specs: Vec<PathBuf>,

    /// Directory searched recursively for `*.json` spec models.
    #[arg(long = "specs")]
    spec_dir: Option<PathBuf>,

    /// Output directory for generated state modules.
    #[arg(long, default_value = "src/generated")]
    out: PathBuf,

    /// Validate and generate in memory without writing any file.
    #[arg(long)]
    check: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(args.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let files = collect_spec_files(&args)?;
    if files.is_empty() {
        bail!("no spec models given: pass --spec <file> or --specs <dir>");
    }

    println!("Processing {} spec model(s)", files.len());

    let mut failed = 0usize;
    for file in &files {
        match process_spec(file, &args) {
            Ok(summary) => println!("  {summary}"),
            Err(err) => {
                failed += 1;
                eprintln!("  FAIL {}: {err:#}", file.display());
            }
        }
    }

    if failed > 0 {
        eprintln!("{failed} of {} spec model(s) failed.", files.len());
        process::exit(1);
    }

    println!(
        "{} complete.",
        if args.check { "Check" } else { "Generation" }
    );
    Ok(())
}

fn directive_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Explicit `--spec` files first, in the given order, then directory
/// matches sorted by path. A file named more than once is kept at its
/// first position.
fn collect_spec_files(args: &Args) -> Result<Vec<PathBuf>> {
    let mut files = args.specs.clone();
    if let Some(dir) = &args.spec_dir {
        let mut found = Vec::new();
        for entry in WalkDir::new(dir) {
            let entry =
                entry.with_context(|| format!("Failed to walk spec directory {}", dir.display()))?;
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "json") {
                found.push(path.to_path_buf());
            }
        }
        found.sort();
        files.extend(found);
    }

    let mut seen = HashSet::new();
    files.retain(|file| seen.insert(file.canonicalize().unwrap_or_else(|_| file.clone())));
    Ok(files)
}

fn process_spec(file: &Path, args: &Args) -> Result<String> {
    let model = SpecModel::from_path(file)
        .with_context(|| format!("Failed to load spec model {}", file.display()))?;

    if args.check {
        let artifacts = stately_codegen::generate(&model)?;
        return Ok(format!(
            "OK   {}: {} methods, {} types",
            model.component_name,
            artifacts.methods.len(),
            artifacts.types.len()
        ));
    }

    let report = stately_codegen::generate_to_file(&model, &args.out)?;
    Ok(format!(
        "OK   {}: {} state fields, {} update methods, {} lazy updaters -> {}",
        report.component,
        report.state_field_count,
        report.update_method_count,
        report.lazy_update_count,
        report.file.display()
    ))
}
