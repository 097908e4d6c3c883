// Stores layer - Data access and repository pattern
pub mod fake_item_store;
pub mod item_store;

pub use fake_item_store::FakeItemStore;
pub use item_store::{ItemRepository, ItemStore};
