//! Model validation.
//!
//! Every inconsistency that would make generated code wrong or uncompilable
//! is caught here, before any synthesis runs. Generation for a model that
//! fails validation is aborted as a whole.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::error::{ModelError, ModelErrors};
use crate::model::{MethodParam, SpecModel, UpdateStateMethod};
use crate::naming::{
    create_state_update_fn_name, entry_point_name, lazy_update_fn_name, state_update_type_name,
};

/// Prefix prepended to a captured parameter's name to form its storage field.
pub const MEMBER_PREFIX: &str = "m_";

/// Names generated code binds as parameters or locals next to user
/// parameters and state-value boxes.
pub const RESERVED_NAMES: &[&str] = &[
    "c",
    "this",
    "component",
    "state_update",
    "state_container",
    "new_component",
    "lazy_update_value",
    "spec",
];

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
];

/// Returns the storage field name of a captured parameter (`delta` → `m_delta`).
///
/// Snake_case rendering of the `mDelta` member-prefix convention.
#[must_use]
pub fn member_name(param: &str) -> String {
    format!("{MEMBER_PREFIX}{param}")
}

/// Returns true if `name` is a plain (non-keyword) Rust identifier.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let head_ok = match chars.next() {
        Some(c) => c == '_' || c.is_ascii_alphabetic(),
        None => false,
    };
    head_ok
        && name != "_"
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        && !KEYWORDS.contains(&name)
}

/// Returns true if `path` is a `::`-separated sequence of identifiers,
/// optionally rooted (`::a::b`) or starting at `crate`/`self`/`super`.
#[must_use]
pub fn is_path(path: &str) -> bool {
    let trimmed = path.strip_prefix("::").unwrap_or(path);
    !trimmed.is_empty()
        && trimmed.split("::").enumerate().all(|(i, segment)| {
            is_identifier(segment) || (i == 0 && matches!(segment, "crate" | "self" | "super"))
        })
}

impl SpecModel {
    /// Checks the model for every inconsistency the generator cannot work
    /// around.
    ///
    /// # Errors
    ///
    /// Returns every [`ModelError`] found, wrapped in [`ModelErrors`].
    pub fn validate(&self) -> Result<(), ModelErrors> {
        let mut errors = Vec::new();

        if !is_path(&self.name) {
            errors.push(ModelError::InvalidIdentifier {
                what: "spec type path",
                name: self.name.clone(),
            });
        }
        if !is_identifier(&self.component_name) {
            errors.push(ModelError::InvalidIdentifier {
                what: "component name",
                name: self.component_name.clone(),
            });
        }

        check_state_values(self, &mut errors);
        for method in &self.update_state_methods {
            check_method(self, method, &mut errors);
        }

        let mut method_names = HashSet::new();
        for method in &self.update_state_methods {
            if !method_names.insert(method.name.as_str()) {
                errors.push(ModelError::DuplicateUpdateMethod {
                    name: method.name.clone(),
                });
            }
        }

        check_generated_names(self, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ModelErrors {
                component: self.component_name.clone(),
                errors,
            })
        }
    }
}

fn check_state_values(model: &SpecModel, errors: &mut Vec<ModelError>) {
    let mut names = HashSet::new();
    for field in &model.state_values {
        if !is_identifier(&field.name) {
            errors.push(ModelError::InvalidIdentifier {
                what: "state field name",
                name: field.name.clone(),
            });
        }
        if RESERVED_NAMES.contains(&field.name.as_str()) {
            errors.push(ModelError::ReservedName {
                owner: "state fields".to_string(),
                name: field.name.clone(),
            });
        }
        if !names.insert(field.name.as_str()) {
            errors.push(ModelError::DuplicateStateField {
                name: field.name.clone(),
            });
        }
    }
}

fn check_method(model: &SpecModel, method: &UpdateStateMethod, errors: &mut Vec<ModelError>) {
    if !is_identifier(&method.name) {
        errors.push(ModelError::InvalidIdentifier {
            what: "update-state method name",
            name: method.name.clone(),
        });
    }

    let mut params = HashSet::new();
    for param in &method.params {
        let name = param.name();
        if !is_identifier(name) {
            errors.push(ModelError::InvalidIdentifier {
                what: "parameter name",
                name: name.to_string(),
            });
        }
        if RESERVED_NAMES.contains(&name) {
            errors.push(ModelError::ReservedName {
                owner: format!("update-state method `{}`", method.name),
                name: name.to_string(),
            });
        }
        if !params.insert(name) {
            errors.push(ModelError::DuplicateParam {
                method: method.name.clone(),
                param: name.to_string(),
            });
        }

        if let MethodParam::StateSlot { name, ty } = param {
            match model.find_state_value(name) {
                None => errors.push(ModelError::UnknownStateSlot {
                    method: method.name.clone(),
                    param: name.clone(),
                }),
                Some(field) if field.ty != *ty => errors.push(ModelError::StateSlotTypeMismatch {
                    method: method.name.clone(),
                    param: name.clone(),
                    expected: field.ty.clone(),
                    found: ty.clone(),
                }),
                Some(_) => {}
            }
        }
    }

    let mut type_params = HashSet::new();
    for type_param in &method.type_params {
        let name = type_param.name.as_str();
        if !is_identifier(name) {
            errors.push(ModelError::InvalidIdentifier {
                what: "type parameter name",
                name: name.to_string(),
            });
        }
        if !type_params.insert(name) {
            errors.push(ModelError::DuplicateParam {
                method: method.name.clone(),
                param: name.to_string(),
            });
        }
        if !method.captured_params().any(|p| mentions(p.ty(), name)) {
            errors.push(ModelError::UnusedTypeParam {
                method: method.name.clone(),
                param: name.to_string(),
            });
        }
    }

    for captured in method.captured_params() {
        let member = member_name(captured.name());
        if method.state_slots().any(|slot| slot.name() == member) {
            errors.push(ModelError::MemberNameCollision {
                method: method.name.clone(),
                captured: captured.name().to_string(),
                member,
            });
        }
    }
}

/// Returns true if the type expression `ty` names `ident` as a whole token.
fn mentions(ty: &str, ident: &str) -> bool {
    ty.split(|c: char| !(c == '_' || c.is_ascii_alphanumeric()))
        .any(|token| token == ident)
}

/// Rejects models whose generated identifiers would be declared twice.
///
/// Inherent methods (entry points, command constructors, lazy updaters) and
/// module-level types are checked as two namespaces. Stateless models
/// generate neither.
fn check_generated_names(model: &SpecModel, errors: &mut Vec<ModelError>) {
    if !model.has_state() {
        return;
    }

    let mut methods = HashMap::new();
    let mut types = HashMap::new();
    claim(&mut types, model.component_name.clone(), "the component".to_string(), errors);
    claim(&mut types, model.state_container_name(), "the state container".to_string(), errors);

    // Repeated method and field names are already reported on their own.
    let mut seen_methods = HashSet::new();
    for method in &model.update_state_methods {
        if !seen_methods.insert(method.name.as_str()) {
            continue;
        }
        let of = |what: &str| format!("the {what} of update-state method `{}`", method.name);
        claim(&mut methods, entry_point_name(&method.name, false), of("entry point"), errors);
        claim(&mut methods, entry_point_name(&method.name, true), of("async entry point"), errors);
        claim(
            &mut methods,
            create_state_update_fn_name(&method.name),
            of("command constructor"),
            errors,
        );
        claim(&mut types, state_update_type_name(&method.name), of("command type"), errors);
    }

    let mut seen_fields = HashSet::new();
    for field in model.lazy_state_values() {
        if !seen_fields.insert(field.name.as_str()) {
            continue;
        }
        claim(
            &mut methods,
            lazy_update_fn_name(&field.name),
            format!("the lazy updater of state field `{}`", field.name),
            errors,
        );
    }
}

/// Records that `origin` produces `name`, reporting an earlier producer.
fn claim(
    produced: &mut HashMap<String, String>,
    name: String,
    origin: String,
    errors: &mut Vec<ModelError>,
) {
    match produced.entry(name) {
        Entry::Occupied(entry) => errors.push(ModelError::GeneratedNameCollision {
            name: entry.key().clone(),
            first: entry.get().clone(),
            second: origin,
        }),
        Entry::Vacant(entry) => {
            entry.insert(origin);
        }
    }
}
