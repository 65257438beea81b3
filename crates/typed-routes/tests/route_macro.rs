//! Integration tests for `#[derive(Param)]` and `route!`.

use typed_routes::prelude::*;

mod keys {
    use typed_routes::Param;

    #[derive(Param)]
    #[param(name = "org", value = &'static str)]
    pub struct Org;
}

#[derive(Param)]
#[param(name = "id", value = u64)]
struct UserId;

#[derive(Param)]
#[param(value = u32)]
struct PageNumber;

#[derive(Param)]
struct Slug;

#[test]
fn test_derive_names() {
    assert_eq!(UserId::NAME, "id");
    assert_eq!(PageNumber::NAME, "page_number");
    assert_eq!(Slug::NAME, "slug");
    assert_eq!(keys::Org::NAME, "org");
}

#[test]
fn test_route_macro_matches_manual_chain() {
    let from_macro = route!("/users/{UserId}/posts/{PageNumber?}");
    let manual = Route::new()
        .segment("users")
        .parameter::<UserId>()
        .segment("posts")
        .optional_parameter::<PageNumber>();

    assert_eq!(from_macro, manual);
    assert_eq!(from_macro.template(), "/users/:id/posts/:page_number?");
}

#[test]
fn test_route_macro_empty_and_static() {
    let empty = route!("");
    let filled: String = empty.filled();
    assert_eq!(filled, "");

    let health = route!("/health/live");
    let filled: String = health.filled();
    assert_eq!(filled, "/health/live");
}

#[test]
fn test_route_macro_accepts_key_paths() {
    let route = route!("/orgs/{keys::Org}/articles/{Slug}");
    assert_eq!(route.template(), "/orgs/:org/articles/:slug");
    assert_eq!(
        route.filled().apply("acme").apply("launch".to_string()),
        "/orgs/acme/articles/launch"
    );
}

#[test]
fn test_route_macro_fillers() {
    let route = route!("/users/{UserId}/posts/{PageNumber?}");
    assert_eq!(route.fill((1, None)), "/users/1/posts");
    assert_eq!(route.fill_all((Some(4), 1)), "/users/1/posts/4");
    assert_eq!(route.filled().apply(1).apply(Some(4)), "/users/1/posts/4");
}

mod facade_paths {
    #[derive(typed_routes::Param)]
    #[param(name = "item", value = u64)]
    pub struct Item;

    pub fn edit_item(id: u64) -> String {
        typed_routes::route!("/items/{Item}/edit").fill((id,))
    }
}

#[test]
fn test_macros_expand_without_imports() {
    assert_eq!(facade_paths::edit_item(3), "/items/3/edit");
}
