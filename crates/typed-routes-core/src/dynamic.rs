//! Routes whose parameter list is only known at runtime.
//!
//! [`DynamicRoute`] carries the same template as a [`Route`] but checks
//! arity and presence when it is filled, returning a [`RouteError`] instead
//! of relying on the type checker. It is what a typed route erases to, and
//! what a template string or a [`RouteSchema`] parses into.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::FillConfig;
use crate::error::RouteError;
use crate::param::ParamSpec;
use crate::route::Route;
use crate::template::{self, Piece};

/// Serializable description of a route: its template and parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSchema {
    /// The rendered template, e.g. `/users/:id/:page?`.
    pub template: String,
    /// Declared parameters in declaration order.
    pub parameters: Vec<ParamSpec>,
}

/// A route template checked at fill time.
#[derive(Clone, PartialEq, Eq)]
pub struct DynamicRoute {
    template: Arc<str>,
    pieces: Arc<[Piece]>,
}

impl DynamicRoute {
    /// Parse a template such as `/users/:id/posts/:page?`.
    ///
    /// `""` is the empty route. Anything else must start with `/` and
    /// consist of non-empty `/`-separated pieces; `:name` declares a
    /// required parameter and `:name?` an optional one. A name may repeat,
    /// as it can in a typed route.
    pub fn parse(template: &str) -> Result<Self, RouteError> {
        let invalid = |detail| RouteError::InvalidTemplate {
            template: template.to_string(),
            detail,
        };

        if template.is_empty() {
            return Ok(Self::from_pieces(Vec::new()));
        }
        let Some(rest) = template.strip_prefix('/') else {
            return Err(invalid("template must start with '/'"));
        };

        let mut pieces = Vec::new();
        for raw in rest.split('/') {
            if raw.is_empty() {
                return Err(invalid("template contains an empty segment"));
            }
            let Some(param) = raw.strip_prefix(':') else {
                pieces.push(Piece::Literal(Cow::Owned(raw.to_string())));
                continue;
            };
            let (name, optional) = match param.strip_suffix('?') {
                Some(name) => (name, true),
                None => (param, false),
            };
            template::validate_param_name(name).map_err(invalid)?;
            pieces.push(Piece::Param(ParamSpec {
                name: Cow::Owned(name.to_string()),
                optional,
            }));
        }

        crate::debug_build!("parsed {template:?} into {} pieces", pieces.len());
        Ok(Self::from_pieces(pieces))
    }

    fn from_pieces(pieces: Vec<Piece>) -> Self {
        Self {
            template: Arc::from(template::render_template(&pieces)),
            pieces: Arc::from(pieces),
        }
    }

    /// The path template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The template's pieces in order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Declared parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> Vec<ParamSpec> {
        template::param_specs(&self.pieces)
    }

    /// Serializable description of this route.
    #[must_use]
    pub fn schema(&self) -> RouteSchema {
        RouteSchema {
            template: self.template.to_string(),
            parameters: self.parameters(),
        }
    }

    /// Fill from values in declaration order, one per parameter.
    ///
    /// `None` omits an optional parameter; for a required one it is a
    /// [`RouteError::MissingParameter`].
    pub fn fill_positional(&self, values: &[Option<&str>]) -> Result<String, RouteError> {
        let specs = self.parameters();
        if values.len() != specs.len() {
            return Err(RouteError::ArityMismatch {
                expected: specs.len(),
                found: values.len(),
            });
        }

        let rendered = specs
            .iter()
            .zip(values)
            .map(|(spec, value)| match value {
                Some(value) => Ok(Some((*value).to_string())),
                None if spec.optional => Ok(None),
                None => Err(RouteError::MissingParameter {
                    name: spec.name.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let out = template::substitute(&self.pieces, &rendered);
        crate::debug_fill!("{} filled positionally -> {out}", self.template);
        Ok(out)
    }

    /// Fill from a parameters bag with the default [`FillConfig`].
    pub fn fill_with<T: Serialize + ?Sized>(&self, params: &T) -> Result<String, RouteError> {
        self.fill_with_config(params, &FillConfig::default())
    }

    /// Fill from a parameters bag: any value serializing to an object whose
    /// keys are parameter names.
    pub fn fill_with_config<T: Serialize + ?Sized>(
        &self,
        params: &T,
        config: &FillConfig,
    ) -> Result<String, RouteError> {
        fill_from_bag(&self.pieces, params, config)
    }
}

/// Shared bag filler for typed and dynamic routes.
///
/// A name declared more than once takes the same bag value at every
/// position.
pub(crate) fn fill_from_bag<T: Serialize + ?Sized>(
    pieces: &[Piece],
    params: &T,
    config: &FillConfig,
) -> Result<String, RouteError> {
    let map = match serde_json::to_value(params)? {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            return Err(RouteError::NotAnObject {
                kind: json_kind(&other),
            });
        }
    };
    let specs = template::param_specs(pieces);

    if config.get_deny_unknown() {
        if let Some(key) = map
            .keys()
            .find(|key| !specs.iter().any(|spec| spec.name == key.as_str()))
        {
            return Err(RouteError::UnknownParameter { name: key.clone() });
        }
    }

    let mut values = Vec::with_capacity(specs.len());
    for spec in &specs {
        let rendered = match map.get(&*spec.name) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() && config.get_empty_as_absent() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            Some(other) => {
                return Err(RouteError::UnsupportedValue {
                    name: spec.name.to_string(),
                    kind: json_kind(other),
                });
            }
        };
        if rendered.is_none() && !spec.optional {
            return Err(RouteError::MissingParameter {
                name: spec.name.to_string(),
            });
        }
        values.push(rendered);
    }

    let out = template::substitute(pieces, &values);
    crate::debug_fill!("filled from bag -> {out}");
    Ok(out)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl FromStr for DynamicRoute {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<RouteSchema> for DynamicRoute {
    type Error = RouteError;

    fn try_from(schema: RouteSchema) -> Result<Self, Self::Error> {
        let route = Self::parse(&schema.template)?;
        if route.parameters() != schema.parameters {
            crate::debug_log!(
                "schema for {:?} lists {} parameters, template declares {}",
                schema.template,
                schema.parameters.len(),
                route.parameters().len()
            );
            return Err(RouteError::InvalidTemplate {
                template: schema.template,
                detail: "parameter list does not match template",
            });
        }
        Ok(route)
    }
}

impl<S> From<&Route<S>> for DynamicRoute {
    fn from(route: &Route<S>) -> Self {
        Self {
            template: Arc::from(route.template()),
            pieces: Arc::from(route.pieces()),
        }
    }
}

impl<S> From<Route<S>> for DynamicRoute {
    fn from(route: Route<S>) -> Self {
        Self::from(&route)
    }
}

impl fmt::Debug for DynamicRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicRoute")
            .field("template", &self.template)
            .field("parameters", &self.parameters())
            .finish()
    }
}

impl fmt::Display for DynamicRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}
