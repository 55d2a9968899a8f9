//! Stately code generator.
//!
//! Takes a validated [`SpecModel`] and synthesizes the state-update machinery
//! of its component: the state presence marker, the state transfer routine,
//! sync/async update entry points, update-command types replaying a
//! mutation, and lazy single-field updaters. The result is an
//! [`ArtifactSet`] whose order is a pure function of the model; it is
//! rendered into one Rust file by [`render_module`].
//!
//! ```
//! use stately_model::{MethodParam, SpecModel, StateField, UpdateStateMethod};
//!
//! let model = SpecModel::new("Counter")
//!     .with_state(StateField::new("count", "i32"))
//!     .with_update_method(UpdateStateMethod::new(
//!         "increment",
//!         vec![
//!             MethodParam::captured("delta", "i32"),
//!             MethodParam::state_slot("count", "i32"),
//!         ],
//!     ));
//! let artifacts = stately_codegen::generate(&model).unwrap();
//! assert!(artifacts.method("increment_async").is_some());
//! assert!(artifacts.type_("IncrementStateUpdate").is_some());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod artifact;
pub mod assemble;
pub mod container;
pub mod emit;
pub mod naming;
pub mod paths;
pub mod state;

use std::path::{Path, PathBuf};

use anyhow::Result;
use stately_model::{ModelErrors, SpecModel};

pub use artifact::{ArtifactSet, MethodArtifact, Placement, TypeArtifact};
pub use assemble::render_module;

/// Report of what was generated for one component.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Component name.
    pub component: String,
    /// Number of declared state fields.
    pub state_field_count: usize,
    /// Number of update-state methods (each yields two entry points and a command type).
    pub update_method_count: usize,
    /// Number of lazy updaters generated.
    pub lazy_update_count: usize,
    /// Number of generated methods.
    pub method_count: usize,
    /// Number of generated types.
    pub type_count: usize,
    /// File written.
    pub file: PathBuf,
}

/// Validates `model` and synthesizes all of its state artifacts.
///
/// Synthesizers run in a fixed order: state container, presence marker,
/// state transfer, update entry points, update commands, lazy updaters.
///
/// # Errors
///
/// Returns every model inconsistency found by [`SpecModel::validate`]; no
/// artifacts are produced for an invalid model.
pub fn generate(model: &SpecModel) -> Result<ArtifactSet, ModelErrors> {
    model.validate()?;
    if !model.has_state() && !model.update_state_methods.is_empty() {
        tracing::warn!(
            component = %model.component_name,
            methods = model.update_state_methods.len(),
            "update-state methods on a stateless component are ignored"
        );
    }

    let artifacts: ArtifactSet = [
        container::generate_state_container(model),
        state::generate_has_state(model),
        state::generate_transfer_state(model),
        state::generate_on_state_update_methods(model),
        state::generate_state_update_classes(model),
        state::generate_lazy_state_update_methods(model),
    ]
    .into_iter()
    .collect();

    tracing::debug!(
        component = %model.component_name,
        methods = artifacts.methods.len(),
        types = artifacts.types.len(),
        "synthesized state artifacts"
    );
    Ok(artifacts)
}

/// Validates, generates and renders `model`'s state module, writing it to
/// `out_dir/<component>_state.rs`.
///
/// # Errors
///
/// Returns an error if the model is invalid or the file cannot be written.
pub fn generate_to_file(model: &SpecModel, out_dir: &Path) -> Result<GenerationReport> {
    let artifacts = generate(model)?;
    let source = render_module(model, &artifacts);

    let file = out_dir.join(naming::state_module_file_name(&model.component_name));
    emit::write_file(&file, &source)?;
    tracing::info!(component = %model.component_name, file = %file.display(), "wrote state module");

    Ok(GenerationReport {
        component: model.component_name.clone(),
        state_field_count: model.state_values.len(),
        update_method_count: model.update_state_methods.len(),
        lazy_update_count: model.lazy_state_values().count(),
        method_count: artifacts.methods.len(),
        type_count: artifacts.types.len(),
        file,
    })
}
