use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::SecretManager;
use crate::errors::InternalError;
use crate::providers::TokenProvider;
use crate::stores::{FakeItemStore, ItemRepository, ItemStore};
use crate::types::internal::Item;
use crate::views::{TemplateRenderer, ViewRenderer};

/// Application-wide dependencies, created once in main.rs
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(db, secret_manager)     AppData::in_memory(items, secret_manager)
///   ├─ item_repository  ItemStore          FakeItemStore
///   ├─ db               Some(db)           None
///   ├─ token_provider (Arc<TokenProvider>)
///   └─ renderer (Arc<dyn ViewRenderer>)
/// ```
pub struct AppData {
    pub item_repository: Arc<dyn ItemRepository>,
    pub db: Option<DatabaseConnection>,
    pub token_provider: Arc<TokenProvider>,
    pub renderer: Arc<dyn ViewRenderer>,
}

impl AppData {
    /// Build application data backed by a migrated database
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when the view templates fail to compile
    pub fn init(db: DatabaseConnection, secret_manager: Arc<SecretManager>) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");
        let item_repository: Arc<dyn ItemRepository> = Arc::new(ItemStore::new(db.clone()));
        Self::assemble(item_repository, Some(db), secret_manager)
    }

    /// Build application data over an in-memory store seeded with `items`
    pub fn in_memory(items: Vec<Item>, secret_manager: Arc<SecretManager>) -> Result<Self, InternalError> {
        tracing::info!(count = items.len(), "Initializing in-memory AppData...");
        let item_repository: Arc<dyn ItemRepository> = Arc::new(FakeItemStore::with_items(items));
        Self::assemble(item_repository, None, secret_manager)
    }

    /// Build application data around an existing repository
    pub fn with_repository(
        item_repository: Arc<dyn ItemRepository>,
        secret_manager: Arc<SecretManager>,
    ) -> Result<Self, InternalError> {
        Self::assemble(item_repository, None, secret_manager)
    }

    fn assemble(
        item_repository: Arc<dyn ItemRepository>,
        db: Option<DatabaseConnection>,
        secret_manager: Arc<SecretManager>,
    ) -> Result<Self, InternalError> {
        let renderer = TemplateRenderer::new()
            .map_err(|e| InternalError::parse("template", format!("Template compilation failed: {}", e)))?;

        tracing::info!("AppData initialization complete");

        Ok(Self {
            item_repository,
            db,
            token_provider: Arc::new(TokenProvider::new(secret_manager)),
            renderer: Arc::new(renderer),
        })
    }
}
