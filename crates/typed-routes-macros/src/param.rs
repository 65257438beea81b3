//! `#[derive(Param)]` implementation.
//!
//! # Supported Attributes
//!
//! - `#[param(name = "...")]` - Name rendered into the template (defaults to
//!   the type name in snake_case)
//! - `#[param(value = Type)]` - Value type (defaults to `String`)

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, DeriveInput, LitStr, Type, parse_macro_input};

/// Parsed `#[param(...)]` attributes.
#[derive(Default)]
struct ParamAttrs {
    name: Option<LitStr>,
    value: Option<Type>,
}

impl ParamAttrs {
    fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("param") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    result.name = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("value") {
                    result.value = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("expected `name` or `value`"))
                }
            })?;
        }

        Ok(result)
    }
}

pub fn derive_param_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Param cannot be derived for generic types",
        ));
    }

    let ident = &input.ident;
    let attrs = ParamAttrs::from_attributes(&input.attrs)?;

    let name = match &attrs.name {
        Some(lit) => {
            let value = lit.value();
            if let Err(detail) = check_param_name(&value) {
                return Err(syn::Error::new_spanned(lit, detail));
            }
            value
        }
        None => to_snake_case(&ident.to_string()),
    };

    let value = match &attrs.value {
        Some(ty) => quote! { #ty },
        None => quote! { ::std::string::String },
    };

    Ok(quote! {
        impl ::typed_routes::__private::Param for #ident {
            const NAME: &'static str = #name;
            type Value = #value;
        }
    })
}

/// Check that `name` can appear as `:name` in a template.
pub(crate) fn check_param_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("parameter name must not be empty");
    }
    if name.contains(&['/', ':', '?', '{', '}'][..]) {
        return Err("parameter name must not contain '/', ':', '?', '{' or '}'");
    }
    Ok(())
}

/// `UserId` -> `user_id`, `HTTPStatus` -> `http_status`.
pub(crate) fn to_snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.trim_start_matches("r#").chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (idx, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let prev_lower =
                idx > 0 && (chars[idx - 1].is_lowercase() || chars[idx - 1].is_ascii_digit());
            let next_lower = chars.get(idx + 1).is_some_and(|c| c.is_lowercase());
            let prev_upper = idx > 0 && chars[idx - 1].is_uppercase();
            if idx > 0 && (prev_lower || (prev_upper && next_lower)) && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}
