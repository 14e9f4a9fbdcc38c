//! Field-level distribution declarations
//!
//! A declaration is the metadata attached to a field: a distribution kind
//! tag plus an ordered list of numeric parameters. Declarations are plain
//! data - they can be written in code, parsed from a compact text form
//! (`normal:10,2`), or deserialized from a TOML schema.
//!
//! # Validation
//!
//! [`Declaration::validate`] is the structural check: at most two parameters
//! (for every kind), and a kind from the supported set. What the parameters
//! mean, and whether their values are acceptable, is decided later by the
//! concrete distribution when the factory builds it.
//!
//! # Example
//!
//! ```
//! use randfill::declaration::Declaration;
//!
//! let decl: Declaration = "normal:64,8".parse().unwrap();
//! assert_eq!(decl.kind(), "normal");
//! assert_eq!(decl.params(), &[64.0, 8.0]);
//!
//! // Three parameters are invalid for every kind
//! assert!(Declaration::new("normal", [1.0, 2.0, 3.0]).validate().is_err());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind tag for the normal (Gaussian) distribution
pub const NORMAL: &str = "normal";

/// Kind tag for the exponential distribution
pub const EXPONENTIAL: &str = "exponential";

/// Maximum number of numeric parameters any declaration may carry
pub const MAX_PARAMS: usize = 2;

/// Distribution metadata attached to a single field
///
/// The kind tag is an open string so that unsupported kinds can be
/// represented and rejected with a useful error instead of failing to
/// deserialize. Kinds are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    kind: String,
    #[serde(default)]
    params: Vec<f64>,
}

impl Declaration {
    /// Create a declaration from a kind tag and parameter list
    ///
    /// No validation happens here; call [`validate`](Self::validate) or let
    /// the generator do it at resolution time.
    pub fn new(kind: impl Into<String>, params: impl Into<Vec<f64>>) -> Self {
        Self {
            kind: kind.into(),
            params: params.into(),
        }
    }

    /// Standard normal N(0, 1)
    pub fn standard_normal() -> Self {
        Self::new(NORMAL, [])
    }

    /// Normal with explicit mean and standard deviation
    pub fn normal(mean: f64, std_dev: f64) -> Self {
        Self::new(NORMAL, [mean, std_dev])
    }

    /// Exponential with explicit rate
    pub fn exponential(rate: f64) -> Self {
        Self::new(EXPONENTIAL, [rate])
    }

    /// Exponential with the default rate (1.0)
    pub fn standard_exponential() -> Self {
        Self::new(EXPONENTIAL, [])
    }

    /// The declared kind tag, as written
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The declared parameters, in order
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Structural acceptability check
    ///
    /// The parameter count is checked before the kind: more than
    /// [`MAX_PARAMS`] parameters is invalid for every kind, supported or
    /// not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDeclaration`] identifying the offending
    /// parameter count or kind.
    pub fn validate(&self) -> Result<()> {
        if self.params.len() > MAX_PARAMS {
            return Err(Error::InvalidDeclaration(format!(
                "{} parameters given, at most {} allowed",
                self.params.len(),
                MAX_PARAMS
            )));
        }

        match self.kind.to_ascii_lowercase().as_str() {
            NORMAL | EXPONENTIAL => Ok(()),
            other => Err(Error::InvalidDeclaration(format!(
                "unsupported distribution kind: {other}"
            ))),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        for (i, param) in self.params.iter().enumerate() {
            if i == 0 {
                write!(f, ":{param}")?;
            } else {
                write!(f, ",{param}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Declaration {
    type Err = Error;

    /// Parse the compact text form: `kind`, `kind:p1`, or `kind:p1,p2`
    ///
    /// The parsed declaration is validated before it is returned, so an
    /// unsupported kind or an over-long parameter list fails here rather
    /// than at generation time.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidDeclaration("empty declaration".to_string()));
        }

        let (kind, params) = match s.split_once(':') {
            Some((kind, rest)) => {
                let params = rest
                    .split(',')
                    .map(|p| {
                        p.trim().parse::<f64>().map_err(|_| {
                            Error::InvalidDeclaration(format!("invalid parameter `{}` in `{s}`", p.trim()))
                        })
                    })
                    .collect::<Result<Vec<f64>>>()?;
                (kind.trim(), params)
            }
            None => (s, Vec::new()),
        };

        let declaration = Self::new(kind, params);
        declaration.validate()?;
        Ok(declaration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_supported_kinds() {
        assert!(Declaration::standard_normal().validate().is_ok());
        assert!(Declaration::normal(10.0, 2.0).validate().is_ok());
        assert!(Declaration::exponential(0.5).validate().is_ok());
        assert!(Declaration::standard_exponential().validate().is_ok());

        // One parameter is structurally fine for either kind
        assert!(Declaration::new(NORMAL, [1.0]).validate().is_ok());
        assert!(Declaration::new(EXPONENTIAL, [1.0, 2.0]).validate().is_ok());
    }

    #[test]
    fn test_validate_kinds_case_insensitive() {
        assert!(Declaration::new("Normal", []).validate().is_ok());
        assert!(Declaration::new("EXPONENTIAL", [2.0]).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_three_params_for_any_kind() {
        let err = Declaration::new(NORMAL, [1.0, 2.0, 3.0]).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidDeclaration(_)));

        let err = Declaration::new(EXPONENTIAL, [1.0, 2.0, 3.0])
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDeclaration(_)));

        // Checked before kind validation: unknown kind with three params
        // still reports the parameter count
        let err = Declaration::new("uniform", [1.0, 2.0, 3.0]).validate().unwrap_err();
        match err {
            Error::InvalidDeclaration(msg) => assert!(msg.contains("3 parameters")),
            other => panic!("Expected InvalidDeclaration, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_unsupported_kind() {
        for params in [vec![], vec![1.0], vec![1.0, 2.0]] {
            let err = Declaration::new("uniform", params).validate().unwrap_err();
            match err {
                Error::InvalidDeclaration(msg) => assert!(msg.contains("uniform")),
                other => panic!("Expected InvalidDeclaration, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_kind_only() {
        let decl: Declaration = "normal".parse().unwrap();
        assert_eq!(decl.kind(), "normal");
        assert!(decl.params().is_empty());
    }

    #[test]
    fn test_parse_with_params() {
        let decl: Declaration = "exponential:0.5".parse().unwrap();
        assert_eq!(decl.params(), &[0.5]);

        let decl: Declaration = "normal: 64, 8".parse().unwrap();
        assert_eq!(decl.params(), &[64.0, 8.0]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Declaration>().is_err());
        assert!("normal:abc".parse::<Declaration>().is_err());
        assert!("normal:".parse::<Declaration>().is_err());
        assert!("uniform:1".parse::<Declaration>().is_err());
        assert!("normal:1,2,3".parse::<Declaration>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let decl = Declaration::normal(10.0, 2.0);
        let parsed: Declaration = decl.to_string().parse().unwrap();
        assert_eq!(parsed, decl);
    }

    #[test]
    fn test_deserialize_from_toml() {
        let decl: Declaration = ::toml::from_str(
            r#"
            kind = "normal"
            params = [10.0, 2.0]
            "#,
        )
        .unwrap();
        assert_eq!(decl, Declaration::normal(10.0, 2.0));

        // params defaults to empty
        let decl: Declaration = ::toml::from_str(r#"kind = "exponential""#).unwrap();
        assert!(decl.params().is_empty());
    }
}
