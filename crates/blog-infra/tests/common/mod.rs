//! Behaviour every `PostStore` backend must share.

#![allow(dead_code)]

use std::collections::HashSet;

use blog_core::{CreateFields, PostStore, StoreError, UpdateFields};

pub fn alice_post() -> CreateFields {
    CreateFields {
        author: Some("alice".into()),
        title: Some("Hi".into()),
        body: Some("first post".into()),
        tags: None,
    }
}

pub async fn empty_store_lists_nothing(store: &dyn PostStore) {
    assert!(store.list().await.unwrap().is_empty());
}

pub async fn create_then_get_returns_same_post(store: &dyn PostStore) {
    let created = store
        .create(CreateFields {
            tags: Some(vec!["rust".into(), "intro".into()]),
            ..alice_post()
        })
        .await
        .unwrap();

    let loaded = store.get_by_id(&created.id).await.unwrap();
    assert_eq!(loaded, created);
}

pub async fn create_without_fields_applies_defaults(store: &dyn PostStore) {
    let post = store.create(CreateFields::default()).await.unwrap();
    assert_eq!(post.author, "anon");
    assert_eq!(post.title, "blog title");
    assert_eq!(post.body, "blog body");
    assert!(post.tags.is_empty());
    assert!(!post.id.is_empty());
}

pub async fn full_lifecycle(store: &dyn PostStore) {
    let created = store.create(alice_post()).await.unwrap();
    assert_eq!(created.author, "alice");
    assert_eq!(created.title, "Hi");
    assert_eq!(created.body, "first post");
    assert!(!created.id.is_empty());
    assert_eq!(created.created_at, created.updated_at);

    let updated = store
        .update_by_id(&created.id, UpdateFields::title("Hi v2"))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Hi v2");
    assert_eq!(updated.author, "alice");
    assert_eq!(updated.body, "first post");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    assert_eq!(store.get_by_id(&created.id).await.unwrap(), updated);

    store.delete_by_id(&created.id).await.unwrap();
    assert!(store.get_by_id(&created.id).await.unwrap_err().is_not_found());
}

pub async fn second_delete_is_not_found(store: &dyn PostStore) {
    let post = store.create(CreateFields::default()).await.unwrap();

    store.delete_by_id(&post.id).await.unwrap();
    let err = store.delete_by_id(&post.id).await.unwrap_err();
    assert_eq!(err, StoreError::not_found(post.id.clone()));
}

pub async fn update_missing_is_not_found(store: &dyn PostStore, missing_id: &str) {
    let err = store
        .update_by_id(missing_id, UpdateFields::title("X"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

pub async fn list_returns_every_created_post_in_order(store: &dyn PostStore) {
    let mut ids = Vec::new();
    for i in 0..5 {
        let post = store
            .create(CreateFields {
                title: Some(format!("post {i}")),
                ..CreateFields::default()
            })
            .await
            .unwrap();
        ids.push(post.id);
    }

    let listed = store.list().await.unwrap();
    assert_eq!(listed.len(), 5);
    let listed_ids: Vec<_> = listed.iter().map(|p| p.id.clone()).collect();
    assert_eq!(listed_ids, ids);
    assert_eq!(listed_ids.iter().collect::<HashSet<_>>().len(), 5);
}

pub async fn deleted_ids_are_not_reused(store: &dyn PostStore) {
    let first = store.create(CreateFields::default()).await.unwrap();
    store.delete_by_id(&first.id).await.unwrap();

    let second = store.create(CreateFields::default()).await.unwrap();
    assert_ne!(first.id, second.id);
}
