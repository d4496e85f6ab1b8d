//! Guarded mutations: identity, ownership, validation, logout.

use chrono::Utc;

use ublog_core::config::UblogConfig;
use ublog_core::errors::{AuthError, UblogError};
use ublog_core::models::User;
use ublog_core::traits::{PostStore, UserStore};
use ublog_resolver::{AppContext, PostInput};

fn seed_user(ctx: &AppContext, id: &str) {
    ctx.store
        .create_user(&User {
            id: id.to_string(),
            username: format!("user-{id}"),
            email: format!("{id}@example.com"),
            created_at: Utc::now(),
        })
        .unwrap();
}

/// Context plus a logged-in session for the given user.
fn context_with_login(user_id: &str) -> (AppContext, String) {
    let ctx = AppContext::open_in_memory(UblogConfig::default()).unwrap();
    seed_user(&ctx, user_id);
    let token = ctx.sessions.create();
    ctx.sessions.bind(&token, user_id);
    (ctx, token)
}

fn input(title: &str, body: &str) -> PostInput {
    PostInput {
        title: title.to_string(),
        body: body.to_string(),
    }
}

#[test]
fn create_post_persists_and_records_the_owner() {
    let (ctx, token) = context_with_login("u1");

    let result = ctx.create_post(&token, &input("hello", "world")).unwrap();
    assert!(result.success);

    let post = result.post.unwrap();
    assert_eq!(post.author_id, "u1");
    let stored = ctx.get_post(&post.id).unwrap().unwrap();
    assert_eq!(stored.title, "hello");
}

#[test]
fn create_without_a_session_is_a_fault() {
    let ctx = AppContext::open_in_memory(UblogConfig::default()).unwrap();
    let err = ctx.create_post("no-token", &input("t", "b")).unwrap_err();
    assert!(matches!(err, UblogError::Auth(AuthError::Unauthenticated)));
}

#[test]
fn expired_session_is_a_fault() {
    let mut config = UblogConfig::default();
    config.session.ttl_secs = 0;
    let ctx = AppContext::open_in_memory(config).unwrap();
    seed_user(&ctx, "u1");
    let token = ctx.sessions.create();
    ctx.sessions.bind(&token, "u1");

    let err = ctx.create_post(&token, &input("t", "b")).unwrap_err();
    assert!(matches!(err, UblogError::Auth(AuthError::Unauthenticated)));
}

#[test]
fn invalid_fields_come_back_per_field_and_nothing_persists() {
    let (ctx, token) = context_with_login("u1");

    let result = ctx.create_post(&token, &input("  ", "")).unwrap();
    assert!(!result.success);
    let errors = result.field_errors.unwrap();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["title", "body"]);
    assert_eq!(ctx.store.count().unwrap(), 0);
}

#[test]
fn overlong_title_is_rejected() {
    let (ctx, token) = context_with_login("u1");
    let result = ctx
        .create_post(&token, &input(&"x".repeat(256), "body"))
        .unwrap();
    assert!(!result.success);
    assert_eq!(result.field_errors.unwrap()[0].field, "title");
}

#[test]
fn update_by_the_owner_succeeds() {
    let (ctx, token) = context_with_login("u1");
    let post = ctx
        .create_post(&token, &input("before", "body"))
        .unwrap()
        .post
        .unwrap();

    let result = ctx
        .update_post(&token, &post.id, &input("after", "body"))
        .unwrap();
    assert!(result.success);
    let stored = ctx.get_post(&post.id).unwrap().unwrap();
    assert_eq!(stored.title, "after");
    assert!(stored.updated_at >= stored.created_at);
}

#[test]
fn update_by_another_user_is_forbidden_and_leaves_the_post_alone() {
    let (ctx, owner_token) = context_with_login("u1");
    seed_user(&ctx, "u2");
    let intruder_token = ctx.sessions.create();
    ctx.sessions.bind(&intruder_token, "u2");

    let post = ctx
        .create_post(&owner_token, &input("mine", "body"))
        .unwrap()
        .post
        .unwrap();

    let result = ctx
        .update_post(&intruder_token, &post.id, &input("stolen", "body"))
        .unwrap();
    assert!(!result.success);
    assert_eq!(result.message, "Not authorized");
    assert_eq!(ctx.get_post(&post.id).unwrap().unwrap().title, "mine");
}

#[test]
fn update_of_a_missing_post_is_not_found() {
    let (ctx, token) = context_with_login("u1");
    let result = ctx.update_post(&token, "ghost", &input("t", "b")).unwrap();
    assert!(!result.success);
    assert_eq!(result.message, "Post not found");
}

#[test]
fn delete_by_another_user_is_forbidden() {
    let (ctx, owner_token) = context_with_login("u1");
    seed_user(&ctx, "u2");
    let intruder_token = ctx.sessions.create();
    ctx.sessions.bind(&intruder_token, "u2");

    let post = ctx
        .create_post(&owner_token, &input("mine", "body"))
        .unwrap()
        .post
        .unwrap();

    let result = ctx.delete_post(&intruder_token, &post.id).unwrap();
    assert!(!result.success);
    assert!(ctx.get_post(&post.id).unwrap().is_some());
}

#[test]
fn delete_by_the_owner_removes_the_post() {
    let (ctx, token) = context_with_login("u1");
    let post = ctx
        .create_post(&token, &input("gone soon", "body"))
        .unwrap()
        .post
        .unwrap();

    let result = ctx.delete_post(&token, &post.id).unwrap();
    assert!(result.success);
    assert!(result.post.is_none());
    assert!(ctx.get_post(&post.id).unwrap().is_none());
}

#[test]
fn logout_destroys_the_session() {
    let (ctx, token) = context_with_login("u1");
    assert!(ctx.logout(&token));
    assert!(!ctx.logout(&token));

    let err = ctx.create_post(&token, &input("t", "b")).unwrap_err();
    assert!(matches!(err, UblogError::Auth(AuthError::Unauthenticated)));
}

#[test]
fn current_user_and_author_lookups() {
    let (ctx, token) = context_with_login("u1");

    let me = ctx.current_user(&token).unwrap().unwrap();
    assert_eq!(me.id, "u1");
    assert!(ctx.current_user("anon-token").unwrap().is_none());

    let post = ctx
        .create_post(&token, &input("t", "b"))
        .unwrap()
        .post
        .unwrap();
    let author = ctx.get_author(&post).unwrap().unwrap();
    assert_eq!(author.id, "u1");
}
