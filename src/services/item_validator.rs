use std::sync::LazyLock;

use regex::Regex;

use crate::types::dto::items::ItemForm;
use crate::types::internal::{Item, ModelState};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-zA-ZæøåÆØÅ. \-]{2,20}$").expect("name pattern is valid"));

const DESCRIPTION_MAX_CHARS: usize = 200;
const PRICE_MIN: f64 = 0.01;

/// Whether the form is creating a new item or editing an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Update,
}

/// Binds an [`ItemForm`] to an [`Item`], collecting field errors
///
/// Rules:
/// - name: required, 2-20 letters, digits, spaces, '.', '-'
/// - price: required number, at least 0.01
/// - description: optional, at most 200 characters
/// - image_url: optional
/// - item_id: ignored on create, positive integer on update
#[derive(Debug, Clone, Default)]
pub struct ItemValidator;

impl ItemValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, form: &ItemForm, mode: ValidationMode) -> Result<Item, ModelState> {
        let mut state = ModelState::new();

        let item_id = match mode {
            ValidationMode::Create => 0,
            ValidationMode::Update => Self::bind_item_id(form.item_id.as_deref(), &mut state),
        };

        let name = form.name.trim();
        if name.is_empty() {
            state.add_error("name", "The Name field is required.");
        } else if !NAME_PATTERN.is_match(name) {
            state.add_error(
                "name",
                "The Name must be numbers or letters and between 2 to 20 characters.",
            );
        }

        let price = Self::bind_price(&form.price, &mut state);

        let description = non_blank(form.description.as_deref());
        if let Some(text) = &description {
            if text.chars().count() > DESCRIPTION_MAX_CHARS {
                state.add_error(
                    "description",
                    format!("The Description must be at most {} characters.", DESCRIPTION_MAX_CHARS),
                );
            }
        }

        if !state.is_valid() {
            return Err(state);
        }

        Ok(Item {
            item_id,
            name: name.to_string(),
            price,
            description,
            image_url: non_blank(form.image_url.as_deref()),
        })
    }

    fn bind_item_id(raw: Option<&str>, state: &mut ModelState) -> i32 {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => {
                state.add_error("item_id", "The ItemId field is required.");
                0
            }
            Some(value) => match value.parse::<i32>() {
                Ok(id) if id > 0 => id,
                _ => {
                    state.add_error("item_id", format!("The value '{}' is not a valid ItemId.", value));
                    0
                }
            },
        }
    }

    fn bind_price(raw: &str, state: &mut ModelState) -> f64 {
        let value = raw.trim();
        if value.is_empty() {
            state.add_error("price", "The Price field is required.");
            return 0.0;
        }
        match value.parse::<f64>() {
            Ok(price) if price.is_finite() && price >= PRICE_MIN => price,
            Ok(_) => {
                state.add_error("price", "The Price must be greater than 0.");
                0.0
            }
            Err(_) => {
                state.add_error("price", format!("The value '{}' is not valid for Price.", value));
                0.0
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
