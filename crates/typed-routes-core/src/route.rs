//! Route values and the append operations.
//!
//! A [`Route<S>`] is an immutable route template whose parameter list is
//! tracked in the type `S`. Appending a segment or parameter borrows the
//! route and returns a new one; the original keeps its template and fillers.
//!
//! # Example
//!
//! ```
//! use typed_routes_core::{Param, Route};
//!
//! struct Id;
//! impl Param for Id {
//!     const NAME: &'static str = "id";
//!     type Value = u64;
//! }
//!
//! struct Page;
//! impl Param for Page {
//!     const NAME: &'static str = "page";
//!     type Value = u32;
//! }
//!
//! let route = Route::new()
//!     .segment("users")
//!     .parameter::<Id>()
//!     .optional_parameter::<Page>();
//!
//! assert_eq!(route.template(), "/users/:id/:page?");
//! assert_eq!(route.fill((42, Some(2))), "/users/42/2");
//! assert_eq!(route.filled().apply(42).apply(None), "/users/42");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;

use crate::config::FillConfig;
use crate::curry::{Curry, PartialFill};
use crate::dynamic::{RouteSchema, fill_from_bag};
use crate::error::RouteError;
use crate::param::{Param, ParamSpec};
use crate::shape::{
    Append, Appended, FlatReversed, FlatValues, Nest, Nil, Optional, Required, Reverse, Reversed,
    Shape,
};
use crate::template::{self, Piece};

/// An immutable route template with parameter list `S`.
pub struct Route<S = Nil> {
    template: Arc<str>,
    pieces: Arc<[Piece]>,
    _shape: PhantomData<fn() -> S>,
}

/// Phantom marker describing the parameters a route accepts.
///
/// It never holds parameter values; its type spells out the parameter list
/// and [`Parameters::specs`] lists it at runtime.
pub struct Parameters<S>(PhantomData<fn() -> S>);

impl<S: Shape> Parameters<S> {
    /// Number of declared parameters.
    pub const LEN: usize = S::LEN;

    /// Describe the declared parameters in declaration order.
    #[must_use]
    pub fn specs(&self) -> Vec<ParamSpec> {
        let mut out = Vec::with_capacity(S::LEN);
        S::describe(&mut out);
        out
    }
}

impl<S> Clone for Parameters<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Parameters<S> {}

impl<S: Shape> fmt::Debug for Parameters<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Parameters").field(&self.specs()).finish()
    }
}

impl Route<Nil> {
    /// Create the empty route: template `""`, no parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::from_pieces(Vec::new())
    }
}

impl Default for Route<Nil> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Route<S> {
    fn from_pieces(pieces: Vec<Piece>) -> Self {
        let template = template::render_template(&pieces);
        Self {
            template: Arc::from(template),
            pieces: Arc::from(pieces),
            _shape: PhantomData,
        }
    }

    fn extended<T>(&self, piece: Piece) -> Route<T> {
        let mut pieces = Vec::with_capacity(self.pieces.len() + 1);
        pieces.extend_from_slice(&self.pieces);
        pieces.push(piece);
        Route::from_pieces(pieces)
    }

    /// The path template, e.g. `/users/:id/:page?`.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The template's pieces in order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Append the literal segment `/segment`.
    ///
    /// `segment` should be non-empty and free of `/`; it is appended as-is.
    /// Use [`Route::try_segment`] to have that checked.
    #[must_use]
    pub fn segment(&self, segment: impl Into<Cow<'static, str>>) -> Self {
        let segment = segment.into();
        crate::debug_build!("{} + segment {:?}", self.template, segment);
        self.extended(Piece::Literal(segment))
    }

    /// Append a literal segment after checking it is a single non-empty
    /// path component.
    pub fn try_segment(
        &self,
        segment: impl Into<Cow<'static, str>>,
    ) -> Result<Self, RouteError> {
        let segment = segment.into();
        template::validate_segment(&segment)?;
        Ok(self.segment(segment))
    }

    /// Append the required parameter `/:K::NAME`.
    #[must_use]
    pub fn parameter<K: Param>(&self) -> Route<Appended<S, Required<K>>>
    where
        S: Append<Required<K>>,
    {
        crate::debug_build!("{} + parameter {}", self.template, K::NAME);
        self.extended(Piece::Param(ParamSpec::required(K::NAME)))
    }

    /// Append the optional parameter `/:K::NAME?`.
    #[must_use]
    pub fn optional_parameter<K: Param>(&self) -> Route<Appended<S, Optional<K>>>
    where
        S: Append<Optional<K>>,
    {
        crate::debug_build!("{} + optional parameter {}", self.template, K::NAME);
        self.extended(Piece::Param(ParamSpec::optional(K::NAME)))
    }

    /// Phantom marker for this route's parameter list.
    #[must_use]
    pub fn parameters(&self) -> Parameters<S> {
        Parameters(PhantomData)
    }

    /// Serializable description of this route.
    #[must_use]
    pub fn schema(&self) -> RouteSchema {
        RouteSchema {
            template: self.template.to_string(),
            parameters: template::param_specs(&self.pieces),
        }
    }
}

impl<S: Shape> Route<S> {
    /// Fill every parameter at once, in declaration order.
    ///
    /// `values` is a flat tuple with one entry per parameter: the value for
    /// a required parameter, an `Option` for an optional one.
    #[must_use]
    pub fn fill(&self, values: FlatValues<S>) -> String
    where
        S::Values: Nest,
    {
        let mut rendered = Vec::with_capacity(S::LEN);
        S::collect(Nest::nest(values), &mut rendered);
        self.finish_fill(&rendered)
    }

    /// Fill every parameter at once, most recently declared first.
    ///
    /// Compatibility form of [`Route::fill`]: for `/:a/:b`, call
    /// `fill_all((b, a))`.
    #[must_use]
    pub fn fill_all(&self, values: FlatReversed<S>) -> String
    where
        S: Reverse,
        Reversed<S>: Shape,
        <Reversed<S> as Shape>::Values: Nest,
    {
        let mut rendered = Vec::with_capacity(S::LEN);
        <Reversed<S> as Shape>::collect(Nest::nest(values), &mut rendered);
        rendered.reverse();
        self.finish_fill(&rendered)
    }

    /// The curried filler.
    ///
    /// For a route without parameters this is the finished path. Otherwise
    /// it is a [`Step`](crate::Step) taking the first-declared parameter;
    /// each `apply` returns the step for the next one, and the last returns
    /// the path.
    pub fn filled(&self) -> S::Filled
    where
        S: Curry,
    {
        S::resume(PartialFill::new(Arc::clone(&self.pieces)))
    }

    /// Fill from a parameters bag: any value serializing to an object whose
    /// keys are parameter names.
    pub fn fill_with<T: Serialize + ?Sized>(&self, params: &T) -> Result<String, RouteError> {
        self.fill_with_config(params, &FillConfig::default())
    }

    /// [`Route::fill_with`] with explicit configuration.
    pub fn fill_with_config<T: Serialize + ?Sized>(
        &self,
        params: &T,
        config: &FillConfig,
    ) -> Result<String, RouteError> {
        fill_from_bag(&self.pieces, params, config)
    }

    fn finish_fill(&self, rendered: &[Option<String>]) -> String {
        let out = template::substitute(&self.pieces, rendered);
        crate::debug_fill!("{} filled -> {out}", self.template);
        out
    }
}

impl<S> Clone for Route<S> {
    fn clone(&self) -> Self {
        Self {
            template: Arc::clone(&self.template),
            pieces: Arc::clone(&self.pieces),
            _shape: PhantomData,
        }
    }
}

impl<S> PartialEq for Route<S> {
    fn eq(&self, other: &Self) -> bool {
        self.pieces == other.pieces
    }
}

impl<S> Eq for Route<S> {}

impl<S> fmt::Debug for Route<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("template", &self.template)
            .field("parameters", &template::param_specs(&self.pieces))
            .finish()
    }
}

impl<S> fmt::Display for Route<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

/// Create the empty route.
#[must_use]
pub fn empty_route() -> Route<Nil> {
    Route::new()
}

/// Append a literal segment to `route`.
#[must_use]
pub fn add_segment<S>(route: &Route<S>, segment: impl Into<Cow<'static, str>>) -> Route<S> {
    route.segment(segment)
}

/// Append the required parameter `K` to `route`.
#[must_use]
pub fn add_parameter<K: Param, S>(route: &Route<S>) -> Route<Appended<S, Required<K>>>
where
    S: Append<Required<K>>,
{
    route.parameter::<K>()
}

/// Append the optional parameter `K` to `route`.
#[must_use]
pub fn add_optional_parameter<K: Param, S>(route: &Route<S>) -> Route<Appended<S, Optional<K>>>
where
    S: Append<Optional<K>>,
{
    route.optional_parameter::<K>()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Id;
    impl Param for Id {
        const NAME: &'static str = "id";
        type Value = u64;
    }

    struct Page;
    impl Param for Page {
        const NAME: &'static str = "page";
        type Value = u32;
    }

    struct A;
    impl Param for A {
        const NAME: &'static str = "a";
        type Value = i32;
    }

    struct B;
    impl Param for B {
        const NAME: &'static str = "b";
        type Value = i32;
    }

    #[test]
    fn test_empty_route() {
        let route = empty_route();
        assert_eq!(route.template(), "");
        assert_eq!(route.fill_all(()), "");
        assert_eq!(route.fill(()), "");
        let filled: String = route.filled();
        assert_eq!(filled, "");
    }

    #[test]
    fn test_segments_fill_to_plain_string() {
        let route = Route::new().segment("a").segment("b");
        assert_eq!(route.template(), "/a/b");
        let filled: String = route.filled();
        assert_eq!(filled, "/a/b");
    }

    #[test]
    fn test_required_parameter_then_segment() {
        let route = add_segment(&add_parameter::<Id, _>(&empty_route()), "edit");
        assert_eq!(route.template(), "/:id/edit");
        assert_eq!(route.filled().apply(42), "/42/edit");
        assert_eq!(route.fill_all((42,)), "/42/edit");
    }

    #[test]
    fn test_optional_parameter_omission() {
        let route = add_optional_parameter::<Page, _>(&add_segment(&empty_route(), "list"));
        assert_eq!(route.template(), "/list/:page?");
        assert_eq!(route.filled().apply(None), "/list");
        assert_eq!(route.filled().apply(Some(5)), "/list/5");
        assert_eq!(route.fill_all((None,)), "/list");
        assert_eq!(route.fill_all((Some(7),)), "/list/7");
    }

    #[test]
    fn test_multi_parameter_ordering() {
        let route = Route::new().parameter::<A>().parameter::<B>();
        assert_eq!(route.template(), "/:a/:b");
        assert_eq!(route.filled().apply(1).apply(2), "/1/2");
        assert_eq!(route.fill_all((2, 1)), "/1/2");
        assert_eq!(route.fill((1, 2)), "/1/2");
    }

    #[test]
    fn test_optional_before_segment_is_dropped_cleanly() {
        let route = Route::new()
            .segment("posts")
            .optional_parameter::<Page>()
            .segment("comments");
        assert_eq!(route.template(), "/posts/:page?/comments");
        assert_eq!(route.fill((None,)), "/posts/comments");
        assert_eq!(route.fill((Some(3),)), "/posts/3/comments");
    }

    #[test]
    fn test_append_does_not_mutate_original() {
        let base = Route::new().segment("users").parameter::<Id>();
        let extended = base.segment("edit").optional_parameter::<Page>();

        assert_eq!(base.template(), "/users/:id");
        assert_eq!(base.fill((9,)), "/users/9");
        assert_eq!(base.filled().apply(9), "/users/9");
        assert_eq!(extended.template(), "/users/:id/edit/:page?");
    }

    #[test]
    fn test_try_segment() {
        let route = Route::new();
        assert_eq!(route.try_segment("ok").unwrap().template(), "/ok");
        assert!(matches!(
            route.try_segment("a/b"),
            Err(RouteError::InvalidSegment { .. })
        ));
        assert!(route.try_segment("").is_err());
    }

    #[test]
    fn test_parameters_marker() {
        let route = Route::new().parameter::<Id>().optional_parameter::<Page>();
        let params = route.parameters();
        assert_eq!(
            params.specs(),
            vec![ParamSpec::required("id"), ParamSpec::optional("page")]
        );
        assert_eq!(Parameters::<Appended<Appended<Nil, Required<Id>>, Optional<Page>>>::LEN, 2);
        assert_eq!(params.specs(), route.schema().parameters);
    }

    #[test]
    fn test_equality_and_display() {
        let a = Route::new().segment("x").parameter::<Id>();
        let b = empty_route().segment("x").parameter::<Id>();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "/x/:id");
    }

    #[test]
    fn test_repeated_name_erases_and_rebuilds() {
        use crate::dynamic::DynamicRoute;

        let route = Route::new().parameter::<Id>().segment("x").parameter::<Id>();
        assert_eq!(route.fill((1, 2)), "/1/x/2");
        assert_eq!(
            route.fill_with(&serde_json::json!({ "id": 5 })).unwrap(),
            "/5/x/5"
        );

        let rebuilt = DynamicRoute::try_from(route.schema()).unwrap();
        assert_eq!(rebuilt, DynamicRoute::from(&route));
        assert_eq!(rebuilt.parameters(), route.parameters().specs());
    }

    #[test]
    fn test_routes_are_send_and_sync() {
        use crate::curry::Step;
        use crate::dynamic::DynamicRoute;
        use crate::shape::Cons;

        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Route>();
        assert_send_sync::<Route<Appended<Appended<Nil, Required<Id>>, Optional<Page>>>>();
        assert_send_sync::<Step<Cons<Required<Id>, Nil>>>();
        assert_send_sync::<DynamicRoute>();
    }
}
