//! State container generation.
//!
//! The container is the one mutable record of a component generation. It is
//! cloned, never shared, when state moves to the next generation.

use crate::artifact::{ArtifactSet, Placement};
use crate::emit::RustFile;
use crate::naming::STATE_CONTAINER_FIELD;
use crate::paths::{RuntimePaths, BOX, CLONE, SOME};
use stately_model::SpecModel;

/// Emits `<Component>StateContainer` with one public field per state field,
/// its `StateContainer` impl, and the `state_container` accessor override.
/// Stateless models produce nothing.
pub fn generate_state_container(model: &SpecModel) -> ArtifactSet {
    let mut artifacts = ArtifactSet::new();
    if !model.has_state() {
        return artifacts;
    }

    let paths = RuntimePaths::new(model);
    let container = model.state_container_name();

    let mut f = RustFile::fragment(0);
    f.doc_comment(&format!("State of one `{}` generation.", model.component_name));
    f.line("#[derive(Clone)]");
    f.open(&format!("pub struct {container}"));
    for state_value in &model.state_values {
        f.doc_comment(&format!("State value `{}`.", state_value.name));
        f.line(&format!("pub {}: {},", state_value.name, state_value.ty));
    }
    f.close();
    f.blank();
    f.open(&format!("impl {} for {container}", paths.state_container));
    f.open(&format!(
        "fn clone_box(&self) -> {BOX}<dyn {}>",
        paths.state_container
    ));
    f.line(&format!("{BOX}::new({CLONE}(self))"));
    f.close();
    f.close();
    artifacts.push_type(container, f.finish());

    let mut accessor = RustFile::fragment(1);
    accessor.open(&format!(
        "fn state_container(&self) -> ::core::option::Option<&dyn {}>",
        paths.state_container
    ));
    accessor.line(&format!("{SOME}(&self.{STATE_CONTAINER_FIELD})"));
    accessor.close();
    artifacts.push_method(
        "state_container",
        Placement::ComponentState,
        accessor.finish(),
    );

    artifacts
}
