use serde::{Deserialize, Serialize};

use crate::types::db::item;

/// A catalog entry
///
/// `item_id` is assigned by the store on create; a freshly validated
/// create payload carries 0 until persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: i32,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<item::Model> for Item {
    fn from(model: item::Model) -> Self {
        Self {
            item_id: model.item_id,
            name: model.name,
            price: model.price,
            description: model.description,
            image_url: model.image_url,
        }
    }
}
