//! Chaining wrapper over the append operations.

use std::borrow::Cow;
use std::fmt;

use crate::param::Param;
use crate::route::Route;
use crate::shape::{Append, Appended, Nil, Optional, Required};

/// Holds one [`Route`] and replaces it on every chained call.
///
/// Each parameter widens the route's type, so chaining methods take the
/// builder by value and return it with the new type.
///
/// ```
/// use typed_routes_core::{Param, RouteBuilder};
///
/// struct Slug;
/// impl Param for Slug {
///     const NAME: &'static str = "slug";
///     type Value = &'static str;
/// }
///
/// let route = RouteBuilder::new()
///     .segment("blog")
///     .parameter::<Slug>()
///     .build();
///
/// assert_eq!(route.template(), "/blog/:slug");
/// assert_eq!(route.filled().apply("hello-world"), "/blog/hello-world");
/// ```
#[must_use = "builders do nothing unless `build` is called"]
pub struct RouteBuilder<S = Nil> {
    route: Route<S>,
}

impl RouteBuilder<Nil> {
    /// Start from the empty route.
    pub fn new() -> Self {
        Self {
            route: Route::new(),
        }
    }
}

impl Default for RouteBuilder<Nil> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> RouteBuilder<S> {
    /// Continue building from an existing route.
    pub fn from_route(route: Route<S>) -> Self {
        Self { route }
    }

    /// Append a literal segment.
    pub fn segment(mut self, segment: impl Into<Cow<'static, str>>) -> Self {
        self.route = self.route.segment(segment);
        self
    }

    /// Append a required parameter.
    pub fn parameter<K: Param>(self) -> RouteBuilder<Appended<S, Required<K>>>
    where
        S: Append<Required<K>>,
    {
        RouteBuilder {
            route: self.route.parameter::<K>(),
        }
    }

    /// Append an optional parameter.
    pub fn optional_parameter<K: Param>(self) -> RouteBuilder<Appended<S, Optional<K>>>
    where
        S: Append<Optional<K>>,
    {
        RouteBuilder {
            route: self.route.optional_parameter::<K>(),
        }
    }

    /// The route built so far.
    #[must_use]
    pub fn route(&self) -> &Route<S> {
        &self.route
    }

    /// Finish and return the route.
    #[must_use]
    pub fn build(self) -> Route<S> {
        self.route
    }
}

impl<S> Clone for RouteBuilder<S> {
    fn clone(&self) -> Self {
        Self {
            route: self.route.clone(),
        }
    }
}

impl<S> fmt::Debug for RouteBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteBuilder")
            .field("route", &self.route)
            .finish()
    }
}

impl<S> From<Route<S>> for RouteBuilder<S> {
    fn from(route: Route<S>) -> Self {
        Self::from_route(route)
    }
}
