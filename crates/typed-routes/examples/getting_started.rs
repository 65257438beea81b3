//! Getting Started Example
//!
//! Walks through building and filling routes.
//!
//! Run with: cargo run --example getting_started -p typed-routes

use serde::Serialize;
use typed_routes::prelude::*;

#[derive(Param)]
#[param(name = "id", value = u64)]
struct UserId;

#[derive(Param)]
#[param(name = "page", value = u32)]
struct Page;

#[derive(Param)]
struct Slug;

#[derive(Serialize)]
struct PostsQuery {
    id: u64,
    page: Option<u32>,
}

fn main() {
    println!("Getting Started - typed_routes\n");

    // === Building with the append operations ===
    println!("1. Append operations:");
    let profile = Route::new().segment("users").parameter::<UserId>();
    println!("   template: {}", profile.template());
    assert_eq!(profile.template(), "/users/:id");

    let edit = profile.segment("edit");
    println!("   template: {} (original still {})", edit.template(), profile);
    assert_eq!(edit.fill((7,)), "/users/7/edit");

    // === Builder ===
    println!("\n2. Builder:");
    let article = RouteBuilder::new()
        .segment("blog")
        .parameter::<Slug>()
        .build();
    let path = article.filled().apply("hello-world".to_string());
    println!("   {} -> {}", article, path);
    assert_eq!(path, "/blog/hello-world");

    // === route! with an optional parameter ===
    println!("\n3. route! macro:");
    let posts = route!("/users/{UserId}/posts/{Page?}");
    println!("   template: {}", posts.template());

    let first = posts.filled().apply(42).skip();
    let third = posts.fill((42, Some(3)));
    let legacy = posts.fill_all((Some(3), 42));
    println!("   first page: {first}");
    println!("   third page: {third}");
    assert_eq!(first, "/users/42/posts");
    assert_eq!(third, legacy);

    // === Parameters bag ===
    println!("\n4. Parameters bag:");
    let from_bag = posts
        .fill_with(&PostsQuery { id: 5, page: None })
        .expect("bag has every required parameter");
    println!("   {from_bag}");
    assert_eq!(from_bag, "/users/5/posts");

    // === Runtime-checked routes ===
    println!("\n5. Dynamic routes:");
    let dynamic: DynamicRoute = "/files/:name/:rev?".parse().expect("valid template");
    match dynamic.fill_positional(&[None, Some("2")]) {
        Ok(path) => println!("   unexpected: {path}"),
        Err(err) => println!("   error: {err}"),
    }
    let schema = serde_json::to_string(&posts.schema()).expect("schema serializes");
    println!("   schema: {schema}");

    println!("\nAll examples passed.");
}
