//! randfill - Distribution-driven test fixture generator
//!
//! randfill populates instances of a target type with pseudo-random values.
//! Each field declares, as metadata, the distribution it samples from; the
//! generator resolves those declarations once per type, builds each sampler
//! lazily on first use, and reuses it for every subsequent instance.
//!
//! # Architecture
//!
//! - **Declarations**: a kind tag (`normal`, `exponential`) plus 0-2 numeric parameters
//! - **Distributions**: stateless samplers drawing from an injected random source
//! - **Fields**: explicit registration of a type's distribution-bearing fields
//! - **Generator**: per-type orchestration with a lazy per-field sampler cache
//! - **Schemas**: TOML-declared field sets generating dynamic records

pub mod declaration;
pub mod distribution;
pub mod field;
pub mod generator;
pub mod schema;

// Re-export commonly used types
pub use declaration::Declaration;
pub use field::{FieldDescriptor, Target};
pub use generator::Generator;

/// Error type for declaration, construction, and sampling failures.
///
/// All three variants are unrecoverable for the `generate` call in which
/// they occur: no retry, no partial instance.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed metadata: unsupported distribution kind, or more than two
    /// parameters. Raised when the declaration is first processed, never
    /// deferred to generation time.
    #[error("invalid distribution declaration: {0}")]
    InvalidDeclaration(String),

    /// Structurally valid declaration with a semantically invalid parameter
    /// value. Raised when the factory attempts construction.
    #[error("invalid distribution parameter: {0}")]
    InvalidParameter(String),

    /// A sampler was used in a state construction should have rejected.
    #[error("invalid sampler state: {0}")]
    InvalidState(String),
}

impl Error {
    /// Prefix the message with the field the error belongs to.
    pub(crate) fn for_field(self, field: &str) -> Self {
        match self {
            Error::InvalidDeclaration(msg) => {
                Error::InvalidDeclaration(format!("field `{field}`: {msg}"))
            }
            Error::InvalidParameter(msg) => {
                Error::InvalidParameter(format!("field `{field}`: {msg}"))
            }
            Error::InvalidState(msg) => Error::InvalidState(format!("field `{field}`: {msg}")),
        }
    }
}

/// Result type used throughout randfill
pub type Result<T> = std::result::Result<T, Error>;
