use serde::{Deserialize, Deserializer, Serialize};

use crate::types::internal::Item;

/// Item payload exactly as submitted by the create and update forms
///
/// Every field is bound as text so that unparsable input (a price of
/// "abc") surfaces as a validation error on re-render instead of a
/// rejected request, and so the caller sees what they typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemForm {
    pub item_id: Option<String>,
    pub name: String,
    pub price: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<&Item> for ItemForm {
    fn from(item: &Item) -> Self {
        Self {
            item_id: Some(item.item_id.to_string()),
            name: item.name.clone(),
            price: item.price.to_string(),
            description: item.description.clone(),
            image_url: item.image_url.clone(),
        }
    }
}

/// `?id=` query used by detail, update, delete and delete-confirmed
///
/// A missing or unparsable id binds as `0`, which no stored item has, so
/// the request still reaches the coordinator and fails as a lookup miss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ItemIdQuery {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: i32,
}

fn lenient_id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(0))
}
