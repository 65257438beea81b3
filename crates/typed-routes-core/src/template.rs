//! Runtime representation of a route template.
//!
//! A template is an ordered list of [`Piece`]s. Every piece renders as one
//! `/`-prefixed path component, so the empty list renders as `""`.

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::error::RouteError;
use crate::param::ParamSpec;

/// One component of a route template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Piece {
    /// A literal segment, rendered as `/text`.
    Literal(Cow<'static, str>),
    /// A parameter, rendered as `/:name` or `/:name?`.
    Param(ParamSpec),
}

impl Piece {
    /// The parameter this piece declares, if any.
    #[must_use]
    pub fn as_param(&self) -> Option<&ParamSpec> {
        match self {
            Self::Literal(_) => None,
            Self::Param(spec) => Some(spec),
        }
    }
}

/// Render the template string, e.g. `/users/:id/:tab?`.
#[must_use]
pub fn render_template(pieces: &[Piece]) -> String {
    let mut out = String::new();
    for piece in pieces {
        match piece {
            Piece::Literal(text) => {
                out.push('/');
                out.push_str(text);
            }
            Piece::Param(spec) => {
                let _ = write!(out, "/{spec}");
            }
        }
    }
    out
}

/// Substitute `values` (one per parameter piece, in declaration order) into
/// the template. A `None` value drops that component from the result.
///
/// Parameter pieces without a corresponding value are dropped as well; the
/// typed fillers always supply exactly one value per parameter.
#[must_use]
pub fn substitute(pieces: &[Piece], values: &[Option<String>]) -> String {
    let mut out = String::new();
    let mut values = values.iter();
    for piece in pieces {
        match piece {
            Piece::Literal(text) => {
                out.push('/');
                out.push_str(text);
            }
            Piece::Param(_) => {
                if let Some(Some(value)) = values.next() {
                    out.push('/');
                    out.push_str(value);
                }
            }
        }
    }
    out
}

/// Parameter descriptors in declaration order.
#[must_use]
pub fn param_specs(pieces: &[Piece]) -> Vec<ParamSpec> {
    pieces.iter().filter_map(Piece::as_param).cloned().collect()
}

/// Check that `segment` is usable as a single literal path component.
pub fn validate_segment(segment: &str) -> Result<(), RouteError> {
    if segment.is_empty() {
        return Err(RouteError::InvalidSegment {
            segment: segment.to_string(),
            detail: "segment is empty",
        });
    }
    if segment.contains('/') {
        return Err(RouteError::InvalidSegment {
            segment: segment.to_string(),
            detail: "segment contains '/'",
        });
    }
    Ok(())
}

/// Check that `name` is usable as a parameter name.
pub(crate) fn validate_param_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("parameter name is empty");
    }
    if name.contains(&['/', ':', '?'][..]) {
        return Err("parameter name contains '/', ':' or '?'");
    }
    Ok(())
}
