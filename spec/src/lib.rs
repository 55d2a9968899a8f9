//! Stately specification model encoded as typed Rust data.
//!
//! The `stately-model` crate describes one UI component spec: its declared
//! state fields, its update-state methods and the runtime type handles the
//! generated code targets. It also validates it before any code is generated.
//!
//! # Entry Point
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
//! assert!(model.validate().is_ok());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod model;
pub mod naming;
pub mod validate;

pub use error::{ModelError, ModelErrors};
pub use model::{MethodParam, SpecModel, StateField, TypeHandles, TypeParam, UpdateStateMethod};
pub use validate::{is_identifier, member_name};

impl SpecModel {
    /// Reads and parses a model from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Parse`] on malformed input; I/O failures are
    /// reported through the same variant's `io` category.
    pub fn from_path(path: &std::path::Path) -> Result<Self, ModelError> {
        let file = std::fs::File::open(path).map_err(serde_json::Error::io)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}
