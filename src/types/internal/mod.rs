// Internal types - never deserialized from callers directly
pub mod auth;
pub mod context;
pub mod item;
pub mod model_state;
pub mod outcome;
pub mod view_model;

pub use item::Item;
pub use model_state::ModelState;
pub use outcome::{Outcome, ViewName};
pub use view_model::{ItemFormViewModel, ItemListViewModel, ListMode, ViewModel};
