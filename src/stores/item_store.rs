use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
};

use crate::errors::InternalError;
use crate::types::db::item::{self, ActiveModel, Entity as Items};
use crate::types::internal::Item;

/// Persistence contract the item coordinator depends on
///
/// Absence and `false` are the only failure signals; implementations log
/// the underlying cause themselves.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn get_all(&self) -> Option<Vec<Item>>;

    async fn get_item_by_id(&self, id: i32) -> Option<Item>;

    async fn create(&self, item: &Item) -> bool;

    async fn update(&self, item: &Item) -> bool;

    async fn delete(&self, id: i32) -> bool;
}

/// SeaORM-backed item store
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All items ordered by id
    pub async fn list_items(&self) -> Result<Vec<Item>, InternalError> {
        let models = Items::find()
            .order_by_asc(item::Column::ItemId)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_items", e))?;

        Ok(models.into_iter().map(Item::from).collect())
    }

    pub async fn find_item(&self, id: i32) -> Result<Option<Item>, InternalError> {
        let model = Items::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_item", e))?;

        Ok(model.map(Item::from))
    }

    /// Insert a new item; the submitted `item_id` is ignored
    ///
    /// # Returns
    /// * `Ok(Item)` - The stored item with its assigned id
    pub async fn insert_item(&self, item: &Item) -> Result<Item, InternalError> {
        let model = ActiveModel {
            item_id: NotSet,
            name: Set(item.name.clone()),
            price: Set(item.price),
            description: Set(item.description.clone()),
            image_url: Set(item.image_url.clone()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| InternalError::database("insert_item", e))?;

        Ok(Item::from(model))
    }

    /// Overwrite every column of an existing item
    ///
    /// Fails with a record-not-found database error when the id is unknown.
    pub async fn replace_item(&self, item: &Item) -> Result<Item, InternalError> {
        let model = ActiveModel {
            item_id: Set(item.item_id),
            name: Set(item.name.clone()),
            price: Set(item.price),
            description: Set(item.description.clone()),
            image_url: Set(item.image_url.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| InternalError::database("replace_item", e))?;

        Ok(Item::from(model))
    }

    /// # Returns
    /// * `Ok(true)` - A row was deleted
    /// * `Ok(false)` - No item with that id
    pub async fn remove_item(&self, id: i32) -> Result<bool, InternalError> {
        let result = Items::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("remove_item", e))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_items(&self) -> Result<u64, InternalError> {
        Items::find()
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_items", e))
    }

    pub async fn ping(&self) -> Result<(), InternalError> {
        self.db
            .ping()
            .await
            .map_err(|e| InternalError::database("ping", e))
    }
}

#[async_trait]
impl ItemRepository for ItemStore {
    async fn get_all(&self) -> Option<Vec<Item>> {
        match self.list_items().await {
            Ok(items) => Some(items),
            Err(e) => {
                tracing::error!(error = %e, "[ItemStore] Query failed while listing items");
                None
            }
        }
    }

    async fn get_item_by_id(&self, id: i32) -> Option<Item> {
        match self.find_item(id).await {
            Ok(item) => item,
            Err(e) => {
                tracing::error!(item_id = id, error = %e, "[ItemStore] Query failed while finding item");
                None
            }
        }
    }

    async fn create(&self, item: &Item) -> bool {
        match self.insert_item(item).await {
            Ok(stored) => {
                tracing::info!(item_id = stored.item_id, "[ItemStore] Item created");
                true
            }
            Err(e) => {
                tracing::error!(item = ?item, error = %e, "[ItemStore] Item creation failed");
                false
            }
        }
    }

    async fn update(&self, item: &Item) -> bool {
        match self.replace_item(item).await {
            Ok(_) => true,
            Err(e) if e.is_record_not_found() => {
                tracing::debug!(item_id = item.item_id, "[ItemStore] No item to update");
                false
            }
            Err(e) => {
                tracing::error!(item = ?item, error = %e, "[ItemStore] Item update failed");
                false
            }
        }
    }

    async fn delete(&self, id: i32) -> bool {
        match self.remove_item(id).await {
            Ok(true) => true,
            Ok(false) => {
                tracing::debug!(item_id = id, "[ItemStore] No item to delete");
                false
            }
            Err(e) => {
                tracing::error!(item_id = id, error = %e, "[ItemStore] Item deletion failed");
                false
            }
        }
    }
}
