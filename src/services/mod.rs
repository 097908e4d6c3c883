// Services layer - Stateless domain rules
pub mod item_validator;

pub use item_validator::{ItemValidator, ValidationMode};
