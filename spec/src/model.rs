//! Core specification model types.
//!
//! These types describe one component spec as typed Rust data: its declared
//! state fields, its update-state methods and the type handles the generated
//! code is written against. A model is produced once by a front end (or
//! loaded from JSON via [`SpecModel::from_json`]) and consumed read-only by
//! the generator.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Path of the runtime crate the default type handles point into.
pub const DEFAULT_RUNTIME_PATH: &str = "::stately_runtime";

/// A declared state field: a named, typed slot owned by the component across
/// its re-render generations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateField {
    /// Field name, as used in the state container (e.g. `"count"`).
    pub name: String,
    /// Rust type of the stored value (e.g. `"i32"`, `"String"`).
    pub ty: String,
    /// Whether a lazy single-value updater is generated for this field.
    #[serde(default)]
    pub can_update_lazily: bool,
}

impl StateField {
    /// Creates a field that cannot be updated lazily.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            can_update_lazily: false,
        }
    }

    /// Marks the field as lazily updatable.
    #[must_use]
    pub fn lazy(mut self) -> Self {
        self.can_update_lazily = true;
        self
    }
}

/// One parameter of an update-state method.
///
/// Every parameter is exactly one of the two kinds. The declaration order of
/// a method's parameters is significant: it is the positional order of the
/// user-written method the generated code calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MethodParam {
    /// An externally supplied value, stored verbatim in the update command and
    /// replayed unchanged.
    Captured {
        /// Parameter name.
        name: String,
        /// Rust type of the parameter.
        ty: String,
    },
    /// A state field the user method reads and rewrites through a state-value
    /// box. `name` must match a declared [`StateField`].
    StateSlot {
        /// Name of the referenced state field.
        name: String,
        /// Value type of the referenced state field.
        ty: String,
    },
}

impl MethodParam {
    /// Creates a captured parameter.
    pub fn captured(name: impl Into<String>, ty: impl Into<String>) -> Self {
        MethodParam::Captured {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Creates a state-slot parameter.
    pub fn state_slot(name: impl Into<String>, ty: impl Into<String>) -> Self {
        MethodParam::StateSlot {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            MethodParam::Captured { name, .. } | MethodParam::StateSlot { name, .. } => name,
        }
    }

    /// Returns the parameter's value type.
    #[must_use]
    pub fn ty(&self) -> &str {
        match self {
            MethodParam::Captured { ty, .. } | MethodParam::StateSlot { ty, .. } => ty,
        }
    }

    /// Returns true for [`MethodParam::Captured`].
    #[must_use]
    pub fn is_captured(&self) -> bool {
        matches!(self, MethodParam::Captured { .. })
    }
}

/// A generic type parameter of an update-state method, used by its captured
/// parameter types (`T` in `value: Vec<T>`).
///
/// Generated entry points and update commands carry the parameter over.
/// `Send + 'static` is always added to `bounds`, since commands move between
/// threads and outlive the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParam {
    /// Parameter name (e.g. `"T"`).
    pub name: String,
    /// Extra bounds, written as in Rust source (e.g. `"::std::fmt::Display"`).
    #[serde(default)]
    pub bounds: String,
}

impl TypeParam {
    /// Creates a type parameter with the given bounds (may be empty).
    pub fn new(name: impl Into<String>, bounds: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: bounds.into(),
        }
    }
}

/// A user-written method that reads and rewrites state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStateMethod {
    /// Method name on the spec (e.g. `"increment"`).
    pub name: String,
    /// Generic type parameters, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<TypeParam>,
    /// Parameters in declaration order.
    #[serde(default)]
    pub params: Vec<MethodParam>,
}

impl UpdateStateMethod {
    /// Creates a non-generic method with the given parameters.
    pub fn new(name: impl Into<String>, params: Vec<MethodParam>) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
            params,
        }
    }

    /// Adds a generic type parameter.
    #[must_use]
    pub fn with_type_param(mut self, param: TypeParam) -> Self {
        self.type_params.push(param);
        self
    }

    /// Iterates the captured parameters in declaration order.
    pub fn captured_params(&self) -> impl Iterator<Item = &MethodParam> {
        self.params.iter().filter(|p| p.is_captured())
    }

    /// Iterates the state-slot parameters in declaration order.
    pub fn state_slots(&self) -> impl Iterator<Item = &MethodParam> {
        self.params.iter().filter(|p| !p.is_captured())
    }
}

/// Type paths the generated code refers to.
///
/// The defaults point at the `stately-runtime` crate. A front end targeting
/// another runtime overrides them; the generated code only relies on the
/// method names of those types, never on their internals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeHandles {
    /// Context passed to entry points (scope resolution and dispatch).
    pub context: String,
    /// Type-erased component trait.
    pub component: String,
    /// Type-erased state container trait.
    pub state_container: String,
    /// Update-command capability every generated command implements.
    pub update_state_interface: String,
    /// Crate providing `StateValue`, `ComponentState`, `StateError` and
    /// `LazyStateUpdate`.
    pub runtime: String,
}

impl Default for TypeHandles {
    fn default() -> Self {
        Self {
            context: format!("{DEFAULT_RUNTIME_PATH}::ComponentContext"),
            component: format!("{DEFAULT_RUNTIME_PATH}::Component"),
            state_container: format!("{DEFAULT_RUNTIME_PATH}::StateContainer"),
            update_state_interface: format!("{DEFAULT_RUNTIME_PATH}::StateUpdate"),
            runtime: DEFAULT_RUNTIME_PATH.to_string(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// The specification of one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecModel {
    /// Spec type name; user update methods are resolved on it (e.g. `"CounterSpec"`).
    pub name: String,
    /// Generated component type name (e.g. `"Counter"`).
    pub component_name: String,
    /// Declared state fields, in declaration order.
    #[serde(default)]
    pub state_values: Vec<StateField>,
    /// Declared update-state methods, in declaration order.
    #[serde(default)]
    pub update_state_methods: Vec<UpdateStateMethod>,
    /// Type handles of the runtime contracts.
    #[serde(default)]
    pub types: TypeHandles,
    /// When true the spec is an instance (`spec: Arc<Spec>` on the component)
    /// and generated commands hold a handle to it instead of calling the spec
    /// statically.
    #[serde(default)]
    pub injected_dependencies: bool,
    /// Whether a state presence marker is requested.
    #[serde(default = "default_true")]
    pub generate_has_state: bool,
}

impl SpecModel {
    /// Creates an empty model for `component_name`, whose spec is named
    /// `<component_name>Spec`.
    pub fn new(component_name: impl Into<String>) -> Self {
        let component_name = component_name.into();
        Self {
            name: format!("{component_name}Spec"),
            component_name,
            state_values: Vec::new(),
            update_state_methods: Vec::new(),
            types: TypeHandles::default(),
            injected_dependencies: false,
            generate_has_state: true,
        }
    }

    /// Appends a state field.
    #[must_use]
    pub fn with_state(mut self, field: StateField) -> Self {
        self.state_values.push(field);
        self
    }

    /// Appends an update-state method.
    #[must_use]
    pub fn with_update_method(mut self, method: UpdateStateMethod) -> Self {
        self.update_state_methods.push(method);
        self
    }

    /// Parses a model from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Parse`] if the input is not a valid model document.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns true if the component declares any state.
    #[must_use]
    pub fn has_state(&self) -> bool {
        !self.state_values.is_empty()
    }

    /// Looks up a state field by name. Returns `None` if not declared.
    #[must_use]
    pub fn find_state_value(&self, name: &str) -> Option<&StateField> {
        self.state_values.iter().find(|s| s.name == name)
    }

    /// Iterates the lazily updatable state fields in declaration order.
    pub fn lazy_state_values(&self) -> impl Iterator<Item = &StateField> {
        self.state_values.iter().filter(|s| s.can_update_lazily)
    }

    /// Name of the concrete state container record generated for this component.
    #[must_use]
    pub fn state_container_name(&self) -> String {
        format!("{}StateContainer", self.component_name)
    }
}
