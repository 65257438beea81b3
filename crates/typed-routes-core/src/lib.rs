//! Core types for typed_routes.
//!
//! This crate provides the route template builder that the facade crate
//! re-exports:
//!
//! - [`Route`]: an immutable path template whose parameter list lives in
//!   its type
//! - [`Param`]: a parameter key: a name plus the value type it accepts
//! - [`RouteBuilder`]: chaining wrapper over the append operations
//! - [`Step`]: the curried filler, one parameter value per call
//! - [`DynamicRoute`]: the same template checked at fill time
//!
//! # Filling a route
//!
//! | Method | Argument order | Checked |
//! |--------|----------------|---------|
//! | [`Route::fill`] | declaration order, flat tuple | compile time |
//! | [`Route::filled`] | declaration order, one call per parameter | compile time |
//! | [`Route::fill_all`] | reverse declaration order, flat tuple | compile time |
//! | [`Route::fill_with`] | parameters bag (any `Serialize` object) | runtime |
//!
//! `fill_all` takes the newest parameter first and exists for callers
//! written against that order; new code should prefer `fill` or `filled`.

#![forbid(unsafe_code)]

pub mod builder;
pub mod config;
pub mod curry;
pub mod debug;
pub mod dynamic;
pub mod error;
pub mod param;
pub mod route;
pub mod shape;
pub mod template;

pub use builder::RouteBuilder;
pub use config::FillConfig;
pub use curry::{Curry, PartialFill, Step};
pub use dynamic::{DynamicRoute, RouteSchema};
pub use error::RouteError;
pub use param::{Param, ParamSpec};
pub use route::{
    Parameters, Route, add_optional_parameter, add_parameter, add_segment, empty_route,
};
pub use shape::{Append, Appended, Cons, Nil, Optional, Required, Reverse, Reversed, Shape, Slot};
pub use template::Piece;
