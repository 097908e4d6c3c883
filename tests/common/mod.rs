// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use migration::{CatalogMigrator, MigratorTrait};
use myshop::api::build_app;
use myshop::app_data::AppData;
use myshop::config::SecretManager;
use myshop::providers::TokenProvider;
use myshop::stores::FakeItemStore;
use myshop::test::utils::{sample_item, TEST_JWT_SECRET};
use poem::test::TestClient;
use poem::Endpoint;
use sea_orm::{Database, DatabaseConnection};

/// Creates an in-memory catalog database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    CatalogMigrator::up(&db, None)
        .await
        .expect("Failed to run catalog migrations");

    db
}

pub fn test_secret_manager() -> Arc<SecretManager> {
    Arc::new(SecretManager::with_jwt_secret(TEST_JWT_SECRET).expect("test secret is long enough"))
}

/// Freshly issued access token for `subject`
pub fn token_for(subject: &str) -> String {
    TokenProvider::new(test_secret_manager())
        .issue_token(subject, 5)
        .expect("Failed to issue test token")
}

/// `Authorization` header value for a freshly issued token
pub fn bearer_for(subject: &str) -> String {
    format!("Bearer {}", token_for(subject))
}

/// Pizza (1), Coke (2) and an item with the id 42
pub fn seeded_store() -> Arc<FakeItemStore> {
    Arc::new(FakeItemStore::with_items(vec![
        sample_item(1, "Pizza", 150.0),
        sample_item(2, "Coke", 30.0),
        sample_item(42, "Tacos", 150.0),
    ]))
}

/// Test client over the full application backed by `store`
pub fn client_for(store: Arc<FakeItemStore>) -> TestClient<impl Endpoint> {
    let app_data =
        AppData::with_repository(store, test_secret_manager()).expect("Failed to build app data");
    TestClient::new(build_app(&app_data, "http://localhost:3000"))
}
