//! Error types for specification model loading and validation.

use std::fmt;

use thiserror::Error;

/// A single inconsistency found in a specification model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The model document could not be parsed.
    #[error("malformed spec model: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two state fields share a name.
    #[error("duplicate state field `{name}`")]
    DuplicateStateField {
        /// The repeated field name.
        name: String,
    },

    /// Two update-state methods share a name.
    #[error("duplicate update-state method `{name}`")]
    DuplicateUpdateMethod {
        /// The repeated method name.
        name: String,
    },

    /// Two parameters of one method share a name.
    #[error("duplicate parameter `{param}` in update-state method `{method}`")]
    DuplicateParam {
        /// The method declaring the parameters.
        method: String,
        /// The repeated parameter name.
        param: String,
    },

    /// A state-slot parameter names a field that is not declared.
    #[error("update-state method `{method}` references undeclared state field `{param}`")]
    UnknownStateSlot {
        /// The method declaring the parameter.
        method: String,
        /// The unmatched parameter name.
        param: String,
    },

    /// A state-slot parameter's type differs from the declared field type.
    #[error(
        "state slot `{param}` in `{method}` has type `{found}`, but the state field is declared as `{expected}`"
    )]
    StateSlotTypeMismatch {
        /// The method declaring the parameter.
        method: String,
        /// The parameter name.
        param: String,
        /// Declared field type.
        expected: String,
        /// Type carried by the parameter.
        found: String,
    },

    /// A captured parameter's storage field name equals a state slot name.
    #[error(
        "in `{method}`, captured parameter `{captured}` is stored as `{member}`, which collides with state slot `{member}`"
    )]
    MemberNameCollision {
        /// The method declaring the parameters.
        method: String,
        /// The captured parameter whose storage name collides.
        captured: String,
        /// The colliding name.
        member: String,
    },

    /// Two generated identifiers in one namespace would be equal.
    #[error("generated name `{name}` is produced by both {first} and {second}")]
    GeneratedNameCollision {
        /// The colliding identifier.
        name: String,
        /// What produced the name first.
        first: String,
        /// What produced it again.
        second: String,
    },

    /// A generic type parameter is not used by any captured parameter type.
    #[error("type parameter `{param}` of update-state method `{method}` is not used by any captured parameter")]
    UnusedTypeParam {
        /// The method declaring the type parameter.
        method: String,
        /// The unused type parameter.
        param: String,
    },

    /// A parameter or state field uses a name the generated code binds itself.
    #[error("`{name}` in {owner} is a name reserved by generated code")]
    ReservedName {
        /// Where the name was declared.
        owner: String,
        /// The reserved name.
        name: String,
    },

    /// A name is not a usable Rust identifier (or path, for the spec name).
    #[error("`{name}` is not a valid {what}")]
    InvalidIdentifier {
        /// What the name was supposed to be.
        what: &'static str,
        /// The offending name.
        name: String,
    },
}

/// All inconsistencies found while validating one model.
///
/// Validation never stops at the first problem, so a spec author sees every
/// error in a single run.
#[derive(Debug)]
pub struct ModelErrors {
    /// Component the errors belong to.
    pub component: String,
    /// The collected errors, in discovery order.
    pub errors: Vec<ModelError>,
}

impl ModelErrors {
    /// Returns the number of collected errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no errors were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ModelErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "spec model `{}` has {} error(s)",
            self.component,
            self.errors.len()
        )?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ModelErrors {}
