//! Build script generating the fixture components' state modules from
//! `specs/*.json` into `OUT_DIR`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use stately_model::SpecModel;

fn main() -> Result<()> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR not set")?;
    let out_dir = PathBuf::from(env::var("OUT_DIR").context("OUT_DIR not set")?);
    let specs_dir = Path::new(&manifest_dir).join("specs");

    // Rerun when specs/ changes (files added/removed)
    println!("cargo:rerun-if-changed={}", specs_dir.display());

    let mut specs: Vec<PathBuf> = fs::read_dir(&specs_dir)
        .with_context(|| format!("Failed to read {}", specs_dir.display()))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    specs.sort();

    for spec in &specs {
        println!("cargo:rerun-if-changed={}", spec.display());
        let model = SpecModel::from_path(spec)
            .with_context(|| format!("Failed to load spec model {}", spec.display()))?;
        stately_codegen::generate_to_file(&model, &out_dir)
            .with_context(|| format!("Failed to generate state module for {}", spec.display()))?;
    }
    Ok(())
}
