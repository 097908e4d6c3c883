use serde::Serialize;

use crate::types::dto::items::ItemForm;
use crate::types::internal::{Item, ModelState};

/// Display mode of the item list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListMode {
    Table,
    Grid,
}

impl ListMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListMode::Table => "Table",
            ListMode::Grid => "Grid",
        }
    }
}

/// Items paired with the mode they are being shown in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemListViewModel {
    pub items: Vec<Item>,
    pub current_view_name: ListMode,
}

impl ItemListViewModel {
    pub fn new(items: Vec<Item>, current_view_name: ListMode) -> Self {
        Self {
            items,
            current_view_name,
        }
    }
}

/// A create/update form together with its validation errors
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemFormViewModel {
    pub form: ItemForm,
    pub errors: ModelState,
}

impl ItemFormViewModel {
    pub fn new(form: ItemForm, errors: ModelState) -> Self {
        Self { form, errors }
    }
}

/// Data handed to the view renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ViewModel {
    ItemList(ItemListViewModel),
    Item(Item),
    Form(ItemFormViewModel),
}
