//! Module assembly: artifact set → one Rust source file.
//!
//! The file is meant to be `include!`d into the module that defines the
//! component struct (with a `state_container` field of the generated
//! container type, and a `spec` field when dependencies are injected).

use crate::artifact::{ArtifactSet, Placement};
use crate::emit::RustFile;
use crate::paths::RuntimePaths;
use stately_model::SpecModel;

/// Renders `artifacts` as the state module of `model`'s component.
///
/// Layout, in order: the `ComponentState` impl (always present, possibly
/// empty), the inherent impl (omitted when empty), then every type.
pub fn render_module(model: &SpecModel, artifacts: &ArtifactSet) -> String {
    let paths = RuntimePaths::new(model);
    let mut f = RustFile::new(&format!(
        "@generated by stately-codegen from `{}`.\n\nDo not edit: regenerate from the spec model instead.",
        model.name
    ));

    write_impl(
        &mut f,
        &format!(
            "impl {} for {}",
            paths.item("ComponentState"),
            model.component_name
        ),
        artifacts,
        Placement::ComponentState,
    );

    if artifacts
        .methods
        .iter()
        .any(|m| m.placement == Placement::Inherent)
    {
        f.blank();
        write_impl(
            &mut f,
            &format!("impl {}", model.component_name),
            artifacts,
            Placement::Inherent,
        );
    }

    for ty in &artifacts.types {
        f.blank();
        f.raw(&ty.source);
    }

    f.finish()
}

fn write_impl(f: &mut RustFile, header: &str, artifacts: &ArtifactSet, placement: Placement) {
    let methods: Vec<&str> = artifacts
        .methods
        .iter()
        .filter(|m| m.placement == placement)
        .map(|m| m.source.as_str())
        .collect();
    if methods.is_empty() {
        f.line(&format!("{header} {{}}"));
        return;
    }
    f.line(&format!("{header} {{"));
    for (i, source) in methods.iter().enumerate() {
        if i > 0 {
            f.blank();
        }
        f.raw(source);
    }
    f.line("}");
}
