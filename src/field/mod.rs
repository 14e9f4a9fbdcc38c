//! Field registration and resolution
//!
//! randfill has no runtime reflection to scan a type's fields, so a target
//! type registers its distribution-bearing fields explicitly: each
//! [`FieldDescriptor`] couples a declaration with the closure that writes a
//! sampled value into one storage location. The [`Target`] trait is the
//! per-type registration hook; [`resolve`] turns the raw registration list
//! into the fixed, validated sequence a generator works from.
//!
//! Descriptor identity is positional: a descriptor's index in the resolved
//! sequence maps 1:1 to a storage location, and the per-field sampler cache
//! is keyed by that index, not by the name string.

use crate::declaration::Declaration;
use crate::Result;
use std::fmt;

/// One distribution-bearing field of a target type
///
/// Couples the field's declaration with the assignment into its storage
/// location. The name is diagnostic only; two registrations with the same
/// name are treated as duplicate declarations on one field.
pub struct FieldDescriptor<T> {
    name: String,
    declaration: Declaration,
    assign: Box<dyn Fn(&mut T, f64) + Send>,
}

impl<T> FieldDescriptor<T> {
    /// Create a descriptor for one field
    ///
    /// # Example
    ///
    /// ```
    /// use randfill::declaration::Declaration;
    /// use randfill::field::FieldDescriptor;
    ///
    /// struct Sample { latency_ms: f64 }
    ///
    /// let field = FieldDescriptor::new(
    ///     "latency_ms",
    ///     Declaration::exponential(0.5),
    ///     |s: &mut Sample, v| s.latency_ms = v,
    /// );
    /// assert_eq!(field.name(), "latency_ms");
    /// ```
    pub fn new(
        name: impl Into<String>,
        declaration: Declaration,
        assign: impl Fn(&mut T, f64) + Send + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            declaration,
            assign: Box::new(assign),
        }
    }

    /// Diagnostic name of the field
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The distribution declaration attached to the field
    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    /// Write a sampled value into the field's storage location
    pub(crate) fn assign(&self, target: &mut T, value: f64) {
        (self.assign)(target, value);
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("declaration", &self.declaration)
            .finish()
    }
}

/// A type whose fields can be populated from declared distributions
///
/// Implementors list their distribution-bearing fields once; the generator
/// resolves that list at construction and never re-scans it.
pub trait Target: Default {
    /// The type's distribution-bearing fields, in declaration order
    fn fields() -> Vec<FieldDescriptor<Self>>
    where
        Self: Sized;
}

/// Resolve a raw registration list into the fixed field sequence
///
/// Runs exactly once per generator construction:
/// - every kept declaration is validated eagerly, so structural errors
///   surface here rather than on the first `generate` call;
/// - a field registered more than once keeps its FIRST declaration, later
///   ones are dropped;
/// - output order is registration order, so generation is deterministic
///   given a deterministic random source.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidDeclaration`], tagged with the field
/// name, for an unsupported kind or an over-long parameter list.
pub fn resolve<T>(raw: Vec<FieldDescriptor<T>>) -> Result<Vec<FieldDescriptor<T>>> {
    let mut resolved: Vec<FieldDescriptor<T>> = Vec::with_capacity(raw.len());

    for field in raw {
        if resolved.iter().any(|kept| kept.name() == field.name()) {
            // First declaration wins
            continue;
        }

        field
            .declaration()
            .validate()
            .map_err(|e| e.for_field(field.name()))?;
        resolved.push(field);
    }

    Ok(resolved)
}
