//! Schema-driven record generation
//!
//! The typed path registers fields in code; this module is the data-driven
//! path. A schema file declares named fields with their distributions in
//! TOML, and [`Schema::into_generator`] turns it into a generator for
//! dynamic [`Record`]s. All resolution rules are shared with the typed
//! path: eager declaration validation, first declaration wins, stable
//! field order.
//!
//! ```toml
//! seed = 42
//!
//! [[fields]]
//! name = "latency_ms"
//! kind = "exponential"
//! params = [0.5]
//!
//! [[fields]]
//! name = "payload_kb"
//! kind = "normal"
//! params = [64.0, 8.0]
//! ```

use crate::declaration::Declaration;
use crate::field::FieldDescriptor;
use crate::generator::Generator;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Dynamic target populated from a schema
///
/// Key order is sorted, so serialized records have a stable field layout.
pub type Record = BTreeMap<String, f64>;

/// One field declaration in a schema file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Field name, becomes the record key
    pub name: String,
    /// Distribution kind tag
    pub kind: String,
    /// Distribution parameters, in order
    #[serde(default)]
    pub params: Vec<f64>,
}

/// A set of field declarations loaded from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Seed for the random source; the CLI's `--seed` takes precedence
    #[serde(default)]
    pub seed: Option<u64>,

    /// Declared fields, in file order
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

impl Schema {
    /// Parse a schema from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let schema = ::toml::from_str(contents).context("Failed to parse TOML schema")?;
        Ok(schema)
    }

    /// Build a record generator from the schema's declarations
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDeclaration`] if any field declares
    /// an unsupported kind or more than two parameters.
    pub fn into_generator(self) -> crate::Result<Generator<Record>> {
        let fields = self
            .fields
            .into_iter()
            .map(|field| {
                let FieldSchema { name, kind, params } = field;
                let declaration = Declaration::new(kind, params);
                let key = name.clone();
                FieldDescriptor::new(name, declaration, move |record: &mut Record, value| {
                    record.insert(key.clone(), value);
                })
            })
            .collect();

        Generator::with_fields(fields)
    }
}

/// Load a schema from a TOML file
pub fn load_schema(path: &Path) -> Result<Schema> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file: {}", path.display()))?;

    Schema::from_toml_str(&contents)
        .with_context(|| format!("Failed to parse schema file: {}", path.display()))
}
