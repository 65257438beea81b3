//! `route!` macro implementation.
//!
//! Expands a template literal into the equivalent chain of append
//! operations:
//!
//! ```text
//! route!("/users/{UserId}/posts/{Page?}")
//! // =>
//! ::typed_routes::__private::Route::new()
//!     .segment("users")
//!     .parameter::<UserId>()
//!     .segment("posts")
//!     .optional_parameter::<Page>()
//! ```
//!
//! Placeholders name the parameter key type; the rendered `:name` comes from
//! that type's `Param::NAME`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{LitStr, Path, parse_macro_input};

/// One parsed piece of a `route!` template.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Part {
    /// Literal segment text.
    Segment(String),
    /// `{Key}` or `{Key?}`.
    Param { key: String, optional: bool },
}

pub fn route_impl(input: TokenStream) -> TokenStream {
    let template = parse_macro_input!(input as LitStr);

    match expand(&template) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(template: &LitStr) -> syn::Result<TokenStream2> {
    let parts = parse_template(&template.value())
        .map_err(|detail| syn::Error::new(template.span(), detail))?;

    let mut chain = quote! { ::typed_routes::__private::Route::new() };
    for part in parts {
        chain = match part {
            Part::Segment(text) => quote! { #chain.segment(#text) },
            Part::Param { key, optional } => {
                let path: Path = syn::parse_str(&key).map_err(|_| {
                    syn::Error::new(
                        template.span(),
                        format!("`{key}` is not a valid parameter key path"),
                    )
                })?;
                if optional {
                    quote! { #chain.optional_parameter::<#path>() }
                } else {
                    quote! { #chain.parameter::<#path>() }
                }
            }
        };
    }

    Ok(chain)
}

/// Split a `route!` template into parts.
pub(crate) fn parse_template(template: &str) -> Result<Vec<Part>, String> {
    if template.is_empty() {
        return Ok(Vec::new());
    }
    let Some(rest) = template.strip_prefix('/') else {
        return Err(format!("route template {template:?} must start with '/'"));
    };

    rest.split('/').map(parse_part).collect()
}

fn parse_part(raw: &str) -> Result<Part, String> {
    if raw.is_empty() {
        return Err("route template contains an empty segment".to_string());
    }

    if let Some(inner) = raw.strip_prefix('{') {
        let Some(inner) = inner.strip_suffix('}') else {
            return Err(format!("unclosed placeholder `{raw}`"));
        };
        let (key, optional) = match inner.trim().strip_suffix('?') {
            Some(key) => (key.trim(), true),
            None => (inner.trim(), false),
        };
        if key.is_empty() {
            return Err(format!("placeholder `{raw}` names no parameter key"));
        }
        return Ok(Part::Param {
            key: key.to_string(),
            optional,
        });
    }

    if raw.contains(&['{', '}'][..]) {
        return Err(format!(
            "placeholder braces must wrap a whole segment, found `{raw}`"
        ));
    }
    if raw.starts_with(':') {
        return Err(format!(
            "`{raw}`: write parameters as `{{Key}}` or `{{Key?}}` in route!"
        ));
    }

    Ok(Part::Segment(raw.to_string()))
}
