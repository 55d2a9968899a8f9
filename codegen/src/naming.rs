//! Spec model → Rust naming rules.
//!
//! Identifier rules shared with validation live in [`stately_model::naming`]
//! and are re-exported here; this module adds the names only the generator
//! cares about (bindings inside generated bodies and output file names).

pub use stately_model::naming::{
    create_state_update_fn_name, entry_point_name, lazy_update_fn_name, state_update_type_name,
    to_snake_case,
};

/// Name of the state container field on generated components.
pub const STATE_CONTAINER_FIELD: &str = "state_container";

/// Name of the spec instance field on components with injected dependencies.
pub const SPEC_FIELD: &str = "spec";

/// Parameter name of the value passed to lazy entry points.
pub const LAZY_UPDATE_VALUE_PARAM: &str = "lazy_update_value";

/// File name of a component's generated state module (`TodoList` → `todo_list_state.rs`).
pub fn state_module_file_name(component: &str) -> String {
    format!("{}_state.rs", to_snake_case(component))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_file_names_are_snake_case() {
        assert_eq!(state_module_file_name("Counter"), "counter_state.rs");
        assert_eq!(state_module_file_name("TodoList"), "todo_list_state.rs");
    }
}
