//! Procedural macros for typed_routes.
//!
//! - `#[derive(Param)]`: declare a parameter key type
//! - `route!("/users/{UserId}/{Page?}")`: build a route from a template
//!   literal, checked at compile time
//!
//! Generated code goes through the hidden `typed_routes::__private` module,
//! so callers only need the `typed-routes` facade as a dependency.

mod param;
mod route;

use proc_macro::TokenStream;

/// Derive `typed_routes::Param` for a marker type.
///
/// # Example
///
/// ```ignore
/// use typed_routes::Param;
///
/// #[derive(Param)]
/// #[param(name = "id", value = u64)]
/// struct UserId;
///
/// #[derive(Param)]
/// struct PostSlug; // name "post_slug", value String
/// ```
#[proc_macro_derive(Param, attributes(param))]
pub fn derive_param(input: TokenStream) -> TokenStream {
    param::derive_param_impl(input)
}

/// Build a route from a template literal.
///
/// Literal segments are written as-is; `{Key}` appends the required
/// parameter `Key` and `{Key?}` the optional one, where `Key` is a path to a
/// type implementing `Param`. Malformed templates are compile errors.
///
/// # Example
///
/// ```ignore
/// use typed_routes::{Param, route};
///
/// #[derive(Param)]
/// #[param(name = "id", value = u64)]
/// struct UserId;
///
/// let edit = route!("/users/{UserId}/edit");
/// assert_eq!(edit.template(), "/users/:id/edit");
/// assert_eq!(edit.filled().apply(42), "/users/42/edit");
/// ```
#[proc_macro]
pub fn route(input: TokenStream) -> TokenStream {
    route::route_impl(input)
}
