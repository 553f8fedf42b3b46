//! Runs the shared contract against a live MongoDB.
//!
//! Ignored by default. Run with `BLOG_TEST_MONGODB_URI` set and
//! `cargo test --features document -- --ignored`; each test uses its own collection.

#![cfg(feature = "document")]

mod common;

use blog_core::{PostStore, StoreError};
use blog_infra::MongoPostStore;
use blog_infra::store::DocumentStoreConfig;

async fn make_store() -> MongoPostStore {
    let url = std::env::var("BLOG_TEST_MONGODB_URI")
        .expect("BLOG_TEST_MONGODB_URI must be set to run the MongoDB tests");
    let config = DocumentStoreConfig {
        url,
        database: "blog-party-test".to_string(),
        collection: format!("posts_{}", uuid::Uuid::new_v4().simple()),
        ..DocumentStoreConfig::default()
    };
    MongoPostStore::connect(&config).await.unwrap()
}

macro_rules! contract_test {
    ($name:ident $(, $arg:expr)*) => {
        #[tokio::test]
        #[ignore = "needs BLOG_TEST_MONGODB_URI"]
        async fn $name() {
            let store = make_store().await;
            common::$name(&store $(, $arg)*).await;
            store.close().await.unwrap();
        }
    };
}

contract_test!(empty_store_lists_nothing);
contract_test!(create_then_get_returns_same_post);
contract_test!(create_without_fields_applies_defaults);
contract_test!(full_lifecycle);
contract_test!(second_delete_is_not_found);
contract_test!(update_missing_is_not_found, "5a0b7b2e9d1c4f0012345678");
contract_test!(list_returns_every_created_post_in_order);
contract_test!(deleted_ids_are_not_reused);

#[tokio::test]
#[ignore = "needs BLOG_TEST_MONGODB_URI"]
async fn malformed_id_is_distinct_from_not_found() {
    let store = make_store().await;
    for result in [
        store.get_by_id("not-an-object-id").await.map(|_| ()),
        store.delete_by_id("not-an-object-id").await,
    ] {
        assert_eq!(result, Err(StoreError::invalid_id("not-an-object-id")));
    }
    store.close().await.unwrap();
}
