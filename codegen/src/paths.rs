//! Fully qualified paths of runtime items referenced by generated code.
//!
//! Generated code never relies on `use` declarations in the including
//! module, so every runtime item is spelled out in full.

use stately_model::SpecModel;

/// `Result` as spelled in generated code.
pub const RESULT: &str = "::core::result::Result";
/// `Option::Some` as spelled in generated code.
pub const SOME: &str = "::core::option::Option::Some";
/// `Box` as spelled in generated code.
pub const BOX: &str = "::std::boxed::Box";
/// `Arc` as spelled in generated code.
pub const ARC: &str = "::std::sync::Arc";
/// `Send` as spelled in generated code.
pub const SEND: &str = "::core::marker::Send";
/// `Clone::clone` as spelled in generated code.
pub const CLONE: &str = "::core::clone::Clone::clone";

/// Paths resolved from one model's type handles.
#[derive(Debug, Clone)]
pub struct RuntimePaths {
    /// Context type.
    pub context: String,
    /// Type-erased component trait.
    pub component: String,
    /// Type-erased state container trait.
    pub state_container: String,
    /// Update-command capability.
    pub update_state: String,
    /// Runtime crate root.
    runtime: String,
}

impl RuntimePaths {
    /// Resolves the paths of `model`.
    pub fn new(model: &SpecModel) -> Self {
        let types = &model.types;
        Self {
            context: types.context.clone(),
            component: types.component.clone(),
            state_container: types.state_container.clone(),
            update_state: types.update_state_interface.clone(),
            runtime: types.runtime.clone(),
        }
    }

    /// Returns the path of an item in the runtime crate.
    pub fn item(&self, name: &str) -> String {
        format!("{}::{name}", self.runtime)
    }

    /// `StateValue<ty>`.
    pub fn state_value(&self, ty: &str) -> String {
        format!("{}<{ty}>", self.item("StateValue"))
    }

    /// `Result<(), StateError>`.
    pub fn update_result(&self) -> String {
        format!("{RESULT}<(), {}>", self.item("StateError"))
    }
}
