//! Structured error types shared across SYM crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`SymError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the SYM engine.
///
/// Decision procedures never use this type for "unknown" outcomes; those
/// are expressed through [`Tri::Unknown`](crate::Tri). Errors are reserved
/// for invalid input, violated structural preconditions, and exhausted
/// resource budgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SymError {
    /// Malformed caller input: invalid images, cycle syntax, degenerate arguments.
    #[error("input error: {0}")]
    Input(ErrorInfo),
    /// A point lies outside the store's current degree.
    #[error("bounds error: {0}")]
    Bounds(ErrorInfo),
    /// A quotient was requested over a set that is not a subgroup.
    #[error("subgroup error: {0}")]
    Subgroup(ErrorInfo),
    /// A quotient was requested where the subgroup order does not divide the group order.
    #[error("divisor error: {0}")]
    Divisor(ErrorInfo),
    /// A safety bound was exceeded: quotient index, series depth, or search budget.
    #[error("limit error: {0}")]
    Limit(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl SymError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SymError::Input(info)
            | SymError::Bounds(info)
            | SymError::Subgroup(info)
            | SymError::Divisor(info)
            | SymError::Limit(info) => info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context_and_hint() {
        let err = SymError::Limit(
            ErrorInfo::new("sylow-budget", "restart budget exhausted")
                .with_context("restarts", 8)
                .with_hint("raise AnalysisOpts::sylow_restarts"),
        );
        let rendered = err.to_string();
        assert!(rendered.contains("sylow-budget"));
        assert!(rendered.contains("restarts=8"));
        assert!(rendered.contains("raise AnalysisOpts"));
    }

    #[test]
    fn serde_roundtrip() {
        let err = SymError::Divisor(ErrorInfo::new("index", "order does not divide"));
        let json = serde_json::to_string(&err).unwrap();
        let back: SymError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
