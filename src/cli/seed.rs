use crate::config::{connect_database, migrate_database, BootstrapSettings};
use crate::errors::InternalError;
use crate::stores::ItemStore;
use crate::types::internal::context::RequestContext;
use crate::types::internal::Item;

const SAMPLE_MENU: &[(&str, f64, &str, &str)] = &[
    (
        "Pizza",
        150.0,
        "Delicious Italian dish with a thin crust topped with tomato sauce, cheese, and various toppings.",
        "/images/pizza.jpg",
    ),
    (
        "Fried Chicken Leg",
        20.0,
        "Crispy and succulent chicken leg that is deep-fried to perfection, often served as a popular fast food item.",
        "/images/chickenleg.jpg",
    ),
    (
        "French Fries",
        50.0,
        "Crispy, golden-brown potato slices seasoned with salt and often served as a popular side dish or snack.",
        "/images/frenchfries.jpg",
    ),
    (
        "Grilled Ribs",
        250.0,
        "Tender and flavorful ribs grilled to perfection, usually served with barbecue sauce.",
        "/images/ribs.jpg",
    ),
    (
        "Tacos",
        150.0,
        "Tortillas filled with various ingredients such as seasoned meat, vegetables, and salsa, folded into a delicious handheld meal.",
        "/images/tacos.jpg",
    ),
    (
        "Fish and Chips",
        180.0,
        "Classic British dish featuring battered and deep-fried fish served with thick-cut fried potatoes.",
        "/images/fishandchips.jpg",
    ),
    (
        "Cider",
        50.0,
        "Refreshing alcoholic beverage made from fermented apple juice, available in various flavors.",
        "/images/cider.jpg",
    ),
    (
        "Coke",
        30.0,
        "Popular carbonated soft drink known for its sweet and refreshing taste.",
        "/images/coke.jpg",
    ),
];

/// The sample menu, numbered from 1 in listing order
pub fn sample_items() -> Vec<Item> {
    SAMPLE_MENU
        .iter()
        .zip(1..)
        .map(|(&(name, price, description, image_url), item_id)| Item {
            item_id,
            name: name.to_string(),
            price,
            description: Some(description.to_string()),
            image_url: Some(image_url.to_string()),
        })
        .collect()
}

/// Insert the sample menu unless the store already holds items
///
/// Returns the number of items inserted.
pub async fn seed_sample_items(store: &ItemStore, ctx: &RequestContext) -> Result<usize, InternalError> {
    let existing = store.count_items().await?;
    if existing > 0 {
        tracing::info!(actor = %ctx.actor_id, existing, "Item table not empty, skipping sample data");
        return Ok(0);
    }

    let items = sample_items();
    for item in &items {
        store.insert_item(item).await?;
    }

    tracing::info!(actor = %ctx.actor_id, count = items.len(), "Seeded sample items");
    Ok(items.len())
}

/// Connect, migrate and seed the configured database
pub async fn run_seed(settings: &BootstrapSettings) -> Result<usize, InternalError> {
    let db = connect_database(settings).await?;
    migrate_database(&db).await?;
    seed_sample_items(&ItemStore::new(db), &RequestContext::for_cli("seed")).await
}
