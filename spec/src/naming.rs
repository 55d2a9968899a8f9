//! Names of the identifiers generated from a model.
//!
//! Deterministic mappings from spec names to the functions and types the
//! generator emits. Validation derives the same names to reject models whose
//! generated identifiers would collide, so both sides share these rules.

/// Suffix of generated update-command type names.
pub const STATE_UPDATE_SUFFIX: &str = "StateUpdate";

/// Suffix of the asynchronous entry point.
pub const ASYNC_SUFFIX: &str = "_async";

/// Prefix of lazy single-field entry points.
pub const LAZY_UPDATE_PREFIX: &str = "lazy_update_";

/// Uppercases the first character (`increment` → `Increment`).
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts a snake_case or camelCase name to PascalCase
/// (`increment_by` → `IncrementBy`, `incrementBy` → `IncrementBy`).
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    s.split('_').filter(|part| !part.is_empty()).map(capitalize).collect()
}

/// Converts a camelCase or PascalCase name into snake_case
/// (`TodoList` → `todo_list`).
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for ch in s.chars() {
        if ch.is_uppercase() {
            // No underscore inside runs of capitals (e.g. "HTTPView")
            if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
        prev = Some(ch);
    }
    result
}

/// Name of the update-command type for an update-state method
/// (`increment` → `IncrementStateUpdate`).
#[must_use]
pub fn state_update_type_name(method: &str) -> String {
    format!("{}{STATE_UPDATE_SUFFIX}", to_pascal_case(method))
}

/// Name of the component method constructing an update command
/// (`increment` → `create_increment_state_update`).
#[must_use]
pub fn create_state_update_fn_name(method: &str) -> String {
    format!("create_{method}_state_update")
}

/// Name of an entry point (`increment`, or `increment_async` when `is_async`).
#[must_use]
pub fn entry_point_name(method: &str, is_async: bool) -> String {
    if is_async {
        format!("{method}{ASYNC_SUFFIX}")
    } else {
        method.to_string()
    }
}

/// Name of the lazy entry point for a state field (`label` → `lazy_update_label`).
#[must_use]
pub fn lazy_update_fn_name(field: &str) -> String {
    format!("{LAZY_UPDATE_PREFIX}{field}")
}
