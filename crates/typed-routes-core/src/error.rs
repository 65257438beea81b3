//! Errors raised by the runtime-checked parts of the route API.
//!
//! The statically typed operations on [`Route`](crate::Route) are total.
//! These errors come from template parsing, literal validation and the
//! parameters-bag / positional fillers of [`DynamicRoute`](crate::DynamicRoute).

use std::fmt;

/// Errors that can occur while building or filling a route at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A template string could not be parsed.
    InvalidTemplate {
        template: String,
        detail: &'static str,
    },
    /// A literal segment was empty or contained a `/`.
    InvalidSegment {
        segment: String,
        detail: &'static str,
    },
    /// A required parameter had no value.
    MissingParameter { name: String },
    /// A value was supplied for a name the route does not declare.
    UnknownParameter { name: String },
    /// Positional values did not match the number of parameters.
    ArityMismatch { expected: usize, found: usize },
    /// A bag value could not be rendered into a path component.
    UnsupportedValue { name: String, kind: &'static str },
    /// The parameters bag did not serialize to an object.
    NotAnObject { kind: &'static str },
    /// The parameters bag failed to serialize.
    Serialize { detail: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTemplate { template, detail } => {
                write!(f, "invalid route template {template:?}: {detail}")
            }
            Self::InvalidSegment { segment, detail } => {
                write!(f, "invalid segment {segment:?}: {detail}")
            }
            Self::MissingParameter { name } => {
                write!(f, "missing value for required parameter `{name}`")
            }
            Self::UnknownParameter { name } => {
                write!(f, "route has no parameter named `{name}`")
            }
            Self::ArityMismatch { expected, found } => {
                write!(f, "expected {expected} parameter values, got {found}")
            }
            Self::UnsupportedValue { name, kind } => {
                write!(f, "parameter `{name}` cannot be rendered from a JSON {kind}")
            }
            Self::NotAnObject { kind } => {
                write!(f, "parameters must serialize to an object, got a JSON {kind}")
            }
            Self::Serialize { detail } => write!(f, "failed to serialize parameters: {detail}"),
        }
    }
}

impl std::error::Error for RouteError {}

impl From<serde_json::Error> for RouteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize {
            detail: err.to_string(),
        }
    }
}
