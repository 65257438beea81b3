//! Compile-time checked URL path templates.
//!
//! typed_routes builds a route template one piece at a time while the type
//! system tracks what it takes to fill it in:
//!
//! - **Parameters**: which named parameters the route declares, and which
//!   of them may be omitted
//! - **Flat filler**: fill every parameter in one call
//! - **Curried filler**: fill one parameter per call, ending in the path
//!
//! # Quick Start
//!
//! ```
//! use typed_routes::prelude::*;
//!
//! #[derive(Param)]
//! #[param(name = "id", value = u64)]
//! struct UserId;
//!
//! #[derive(Param)]
//! #[param(name = "page", value = u32)]
//! struct Page;
//!
//! let posts = route!("/users/{UserId}/posts/{Page?}");
//!
//! assert_eq!(posts.template(), "/users/:id/posts/:page?");
//! assert_eq!(posts.fill((42, None)), "/users/42/posts");
//! assert_eq!(posts.filled().apply(42).apply(Some(3)), "/users/42/posts/3");
//! ```
//!
//! # Crate Structure
//!
//! - [`typed_routes_core`]: routes, parameter lists, fillers, builder
//! - [`typed_routes_macros`]: `#[derive(Param)]` and `route!`

#![forbid(unsafe_code)]

// Re-export crates
pub use typed_routes_core as core;
pub use typed_routes_macros as macros;

// Re-export commonly used types
pub use typed_routes_core::{
    DynamicRoute, FillConfig, Param, ParamSpec, Parameters, PartialFill, Route, RouteBuilder,
    RouteError, RouteSchema, Step, add_optional_parameter, add_parameter, add_segment,
    empty_route,
};
pub use typed_routes_macros::{Param, route};

// Paths used by `#[derive(Param)]` and `route!` expansions.
#[doc(hidden)]
pub mod __private {
    pub use typed_routes_core::{Param, Route};
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        DynamicRoute, FillConfig, Param, ParamSpec, Route, RouteBuilder, RouteError, Step, route,
    };
}

/// Type-level parameter lists, for naming route types in signatures.
pub mod shape {
    pub use typed_routes_core::shape::{
        Append, Appended, Cons, Nil, Optional, Required, Reverse, Reversed, Shape, Slot,
    };
}
