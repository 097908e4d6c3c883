use std::collections::BTreeMap;

use serde::Serialize;

/// Field-level validation errors for a submitted form
///
/// Serializes as `{ "field": ["message", ...] }` so templates can show
/// messages next to the offending input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ModelState {
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl ModelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_model_state_is_valid() {
        let state = ModelState::new();
        assert!(state.is_valid());
        assert!(state.errors_for("name").is_empty());
    }

    #[test]
    fn test_errors_accumulate_per_field() {
        let mut state = ModelState::new();
        state.add_error("price", "The Price field is required.");
        state.add_error("price", "The Price must be greater than 0.");
        state.add_error("name", "The Name field is required.");

        assert!(!state.is_valid());
        assert_eq!(state.errors_for("price").len(), 2);
        assert_eq!(state.fields().collect::<Vec<_>>(), vec!["name", "price"]);
    }

    #[test]
    fn test_serializes_as_field_map() {
        let mut state = ModelState::new();
        state.add_error("name", "bad");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json, serde_json::json!({ "name": ["bad"] }));
    }
}
