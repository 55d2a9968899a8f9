//! Generated declarations and the set that accumulates them.

/// Where a generated method is placed in the assembled module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Override inside `impl ComponentState for <Component>`.
    ComponentState,
    /// Associated function or method inside `impl <Component>`.
    Inherent,
}

/// A generated method, rendered at one level of indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodArtifact {
    /// Method name.
    pub name: String,
    /// Target impl block.
    pub placement: Placement,
    /// Rendered source.
    pub source: String,
}

/// A generated item at module level (struct plus its impl blocks).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeArtifact {
    /// Type name.
    pub name: String,
    /// Rendered source.
    pub source: String,
}

/// An ordered collection of generated declarations.
///
/// Every synthesizer returns one; [`crate::generate`] concatenates them.
/// Order is insertion order and is part of the output contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    /// Generated methods, in generation order.
    pub methods: Vec<MethodArtifact>,
    /// Generated types, in generation order.
    pub types: Vec<TypeArtifact>,
}

impl ArtifactSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a method.
    pub fn push_method(&mut self, name: impl Into<String>, placement: Placement, source: String) {
        self.methods.push(MethodArtifact {
            name: name.into(),
            placement,
            source,
        });
    }

    /// Appends a type.
    pub fn push_type(&mut self, name: impl Into<String>, source: String) {
        self.types.push(TypeArtifact {
            name: name.into(),
            source,
        });
    }

    /// Appends everything from `other`, keeping its order.
    pub fn extend(&mut self, other: ArtifactSet) {
        self.methods.extend(other.methods);
        self.types.extend(other.types);
    }

    /// Returns true if nothing was generated.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty() && self.types.is_empty()
    }

    /// Looks up a method by name.
    pub fn method(&self, name: &str) -> Option<&MethodArtifact> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Looks up a type by name.
    pub fn type_(&self, name: &str) -> Option<&TypeArtifact> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Names of the methods with the given placement, in order.
    pub fn method_names(&self, placement: Placement) -> Vec<&str> {
        self.methods
            .iter()
            .filter(|m| m.placement == placement)
            .map(|m| m.name.as_str())
            .collect()
    }

    /// Names of the generated types, in order.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.name.as_str()).collect()
    }
}

impl FromIterator<ArtifactSet> for ArtifactSet {
    fn from_iter<I: IntoIterator<Item = ArtifactSet>>(iter: I) -> Self {
        let mut set = ArtifactSet::new();
        for other in iter {
            set.extend(other);
        }
        set
    }
}
