//! Fixture generation
//!
//! A [`Generator`] is built once per target type and then produces any
//! number of populated instances. Construction resolves the type's field
//! registrations exactly once; each `generate` call allocates a fresh
//! default instance, samples every resolved field, and assigns the values
//! in registration order.
//!
//! # Sampler cache
//!
//! The distribution behind a field is built by the factory on the first
//! `generate` call that needs it, then cached for the lifetime of the
//! generator: at most one build per field, parameters never re-read,
//! entries never evicted. The cache is keyed by field position and scoped
//! to the generator instance - two generators for the same type share
//! nothing, and two fields with identical declarations get separate
//! samplers.
//!
//! # Failure
//!
//! If any field's build or draw fails, the whole `generate` call fails and
//! the partially populated instance is dropped. Nothing is retried or
//! skipped.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//! use randfill::declaration::Declaration;
//! use randfill::field::{FieldDescriptor, Target};
//! use randfill::generator::Generator;
//!
//! #[derive(Debug, Default)]
//! struct Request {
//!     latency_ms: f64,
//!     payload_kb: f64,
//! }
//!
//! impl Target for Request {
//!     fn fields() -> Vec<FieldDescriptor<Self>> {
//!         vec![
//!             FieldDescriptor::new(
//!                 "latency_ms",
//!                 Declaration::exponential(0.5),
//!                 |r: &mut Request, v| r.latency_ms = v,
//!             ),
//!             FieldDescriptor::new(
//!                 "payload_kb",
//!                 Declaration::normal(64.0, 8.0),
//!                 |r: &mut Request, v| r.payload_kb = v,
//!             ),
//!         ]
//!     }
//! }
//!
//! let mut generator = Generator::<Request>::new().unwrap();
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
//!
//! let request = generator.generate(&mut rng).unwrap();
//! assert!(request.latency_ms >= 0.0);
//! ```

use crate::distribution::{self, Distribution};
use crate::field::{self, FieldDescriptor, Target};
use crate::Result;
use rand::RngCore;

/// Populates instances of one target type from its field declarations
///
/// The resolved field sequence is fixed at construction; the per-field
/// sampler cache fills in lazily and lives as long as the generator.
/// `generate` takes `&mut self`, so sharing a generator across threads
/// requires external synchronization by construction.
pub struct Generator<T> {
    /// Resolved field descriptors, in registration order
    fields: Vec<FieldDescriptor<T>>,

    /// Lazily built sampler per field, index-aligned with `fields`
    distributions: Vec<Option<Box<dyn Distribution>>>,
}

impl<T> std::fmt::Debug for Generator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("fields", &self.fields)
            .field("distributions", &self.distributions)
            .finish()
    }
}

impl<T: Default> Generator<T> {
    /// Create a generator from the type's registered fields
    ///
    /// Resolution happens here, once; it is never repeated for the lifetime
    /// of the generator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDeclaration`] if any registered
    /// field's declaration is structurally invalid (unsupported kind, or
    /// more than two parameters), whether or not the field would ever be
    /// sampled.
    pub fn new() -> Result<Self>
    where
        T: Target,
    {
        Self::with_fields(T::fields())
    }

    /// Create a generator from an explicit descriptor list
    ///
    /// Same resolution contract as [`new`](Self::new); this is the entry
    /// point for targets whose fields are only known at runtime, such as
    /// schema-driven records.
    pub fn with_fields(fields: Vec<FieldDescriptor<T>>) -> Result<Self> {
        let fields = field::resolve(fields)?;

        let mut distributions = Vec::new();
        distributions.resize_with(fields.len(), || None);

        Ok(Self {
            fields,
            distributions,
        })
    }

    /// Generate one fully populated instance
    ///
    /// Allocates `T::default()`, then for each resolved field: reuse the
    /// cached sampler or build and cache it, draw a value from the supplied
    /// source, and assign it. The source is advanced and nothing else about
    /// it is touched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidParameter`] if a field's sampler
    /// cannot be built, or [`crate::Error::InvalidState`] if a sampler
    /// rejects the draw. The partially populated instance is discarded.
    pub fn generate(&mut self, rng: &mut dyn RngCore) -> Result<T> {
        let mut target = T::default();

        for (field, slot) in self.fields.iter().zip(self.distributions.iter_mut()) {
            let value = match slot.as_deref() {
                Some(dist) => dist.sample(rng).map_err(|e| e.for_field(field.name()))?,
                None => {
                    let dist = distribution::build(field.declaration())
                        .map_err(|e| e.for_field(field.name()))?;
                    let value = dist.sample(rng).map_err(|e| e.for_field(field.name()))?;
                    *slot = Some(dist);
                    value
                }
            };

            field.assign(&mut target, value);
        }

        Ok(target)
    }

    /// Number of resolved fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// The resolved field descriptors, in generation order
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Number of samplers built so far
    ///
    /// Never exceeds [`field_count`](Self::field_count), regardless of how
    /// many instances have been generated.
    pub fn distributions_built(&self) -> usize {
        self.distributions.iter().filter(|d| d.is_some()).count()
    }
}
