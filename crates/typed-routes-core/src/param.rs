//! Parameter keys.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named path parameter and the type of value it accepts.
///
/// Keys are usually zero-sized marker types, declared with
/// `#[derive(Param)]` from the macros crate or implemented by hand:
///
/// ```
/// use typed_routes_core::Param;
///
/// struct UserId;
///
/// impl Param for UserId {
///     const NAME: &'static str = "id";
///     type Value = u64;
/// }
///
/// assert_eq!(UserId::NAME, "id");
/// ```
pub trait Param: 'static {
    /// Name rendered into the template as `:NAME`.
    const NAME: &'static str;
    /// Type of the value substituted for this parameter.
    type Value: fmt::Display;
}

/// Runtime description of one declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name, without the leading `:` or trailing `?`.
    pub name: Cow<'static, str>,
    /// Whether the parameter may be omitted.
    #[serde(default)]
    pub optional: bool,
}

impl ParamSpec {
    /// Describe a required parameter.
    #[must_use]
    pub fn required(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            optional: false,
        }
    }

    /// Describe an optional parameter.
    #[must_use]
    pub fn optional(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            optional: true,
        }
    }
}

impl fmt::Display for ParamSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            write!(f, ":{}?", self.name)
        } else {
            write!(f, ":{}", self.name)
        }
    }
}
