//! Integration tests for route construction and the three fillers.
//!
//! Covers:
//! - the empty route
//! - literal segments (no curried layer)
//! - required and optional parameters
//! - forward vs reverse argument order
//! - builder equivalence and non-mutation

use insta::assert_snapshot;
use typed_routes::prelude::*;
use typed_routes::{add_optional_parameter, add_parameter, add_segment, empty_route};

#[derive(Param)]
#[param(name = "id", value = u64)]
struct Id;

#[derive(Param)]
#[param(name = "page", value = u32)]
struct Page;

#[derive(Param)]
#[param(name = "a", value = i32)]
struct A;

#[derive(Param)]
#[param(name = "b", value = i32)]
struct B;

#[derive(Param)]
#[param(name = "y")]
struct Y;

// ============================================================================
// EMPTY ROUTE
// ============================================================================

#[test]
fn test_empty_route() {
    let route = empty_route();
    assert_eq!(route.template(), "");
    assert_eq!(route.fill_all(()), "");

    let filled: String = route.filled();
    assert_eq!(filled, "");
    assert!(route.parameters().specs().is_empty());
}

// ============================================================================
// SEGMENTS
// ============================================================================

#[test]
fn test_segments_compose() {
    let route = add_segment(&add_segment(&empty_route(), "a"), "b");
    assert_eq!(route.template(), "/a/b");

    // No parameters: the curried filler is already the string.
    let filled: String = route.filled();
    assert_eq!(filled, "/a/b");
}

// ============================================================================
// PARAMETERS
// ============================================================================

#[test]
fn test_required_parameter_round_trip() {
    let route = add_segment(&add_parameter::<Id, _>(&empty_route()), "edit");

    assert_snapshot!(route.template(), @"/:id/edit");
    assert_eq!(route.filled().apply(42), "/42/edit");
    assert_eq!(route.fill_all((42,)), "/42/edit");
}

#[test]
fn test_optional_parameter_omission() {
    let route = add_optional_parameter::<Page, _>(&add_segment(&empty_route(), "list"));

    assert_snapshot!(route.template(), @"/list/:page?");
    assert_eq!(route.filled().apply(None), "/list");
    assert_eq!(route.filled().apply(Some(5)), "/list/5");
    assert_eq!(route.filled().skip(), "/list");
    assert_eq!(route.fill_all((None,)), "/list");
    assert_eq!(route.fill_all((Some(7),)), "/list/7");
}

#[test]
fn test_multi_parameter_ordering() {
    let route = Route::new().parameter::<A>().parameter::<B>();

    // Curried: first-declared parameter first.
    assert_eq!(route.filled().apply(1).apply(2), "/1/2");
    // Flat compatibility form: most recently declared first.
    assert_eq!(route.fill_all((2, 1)), "/1/2");
    // Flat primary form: declaration order.
    assert_eq!(route.fill((1, 2)), "/1/2");
}

#[test]
fn test_optional_between_required_parameters() {
    let route = Route::new()
        .segment("users")
        .parameter::<Id>()
        .optional_parameter::<Page>()
        .segment("comments")
        .parameter::<A>();

    assert_snapshot!(route.template(), @"/users/:id/:page?/comments/:a");
    assert_eq!(route.fill((3, None, -1)), "/users/3/comments/-1");
    assert_eq!(route.fill((3, Some(2), -1)), "/users/3/2/comments/-1");
    assert_eq!(route.fill_all((-1, None, 3)), "/users/3/comments/-1");
    assert_eq!(
        route.filled().apply(3).skip().apply(-1),
        "/users/3/comments/-1"
    );
}

#[test]
fn test_curried_steps_report_pending_parameters() {
    let route = Route::new().parameter::<A>().optional_parameter::<Page>();
    let step = route.filled();
    assert_eq!(step.next_name(), Some("a"));

    let step = step.apply(10);
    assert_eq!(step.next_name(), Some("page"));
    assert_eq!(step.partial().resolved(), 1);
    assert_eq!(step.partial().pending().count(), 1);
}

// ============================================================================
// BUILDER
// ============================================================================

#[test]
fn test_builder_equivalence() {
    let built = RouteBuilder::new().segment("x").parameter::<Y>().build();
    let manual = add_parameter::<Y, _>(&add_segment(&empty_route(), "x"));

    assert_eq!(built, manual);
    assert_eq!(built.template(), "/x/:y");
    assert_eq!(
        built.fill_all(("v".to_string(),)),
        manual.fill_all(("v".to_string(),))
    );
    assert_eq!(
        built.filled().apply("v".to_string()),
        manual.filled().apply("v".to_string())
    );
}

#[test]
fn test_builder_adopts_existing_route() {
    let base = Route::new().segment("teams").parameter::<Id>();
    let route = RouteBuilder::from_route(base)
        .segment("members")
        .optional_parameter::<Page>()
        .build();

    assert_eq!(route.template(), "/teams/:id/members/:page?");
    assert_eq!(route.fill((1, Some(2))), "/teams/1/members/2");
}

// ============================================================================
// NON-MUTATION
// ============================================================================

#[test]
fn test_operations_do_not_mutate_input() {
    let original = Route::new().segment("list").optional_parameter::<Page>();
    let before_template = original.template().to_string();
    let before_fill = original.fill_all((Some(1),));
    let before_curried = original.filled().apply(Some(1));

    let _segment = original.segment("more");
    let _param = original.parameter::<Id>();
    let _optional = original.optional_parameter::<A>();

    assert_eq!(original.template(), before_template);
    assert_eq!(original.fill_all((Some(1),)), before_fill);
    assert_eq!(original.filled().apply(Some(1)), before_curried);
}
