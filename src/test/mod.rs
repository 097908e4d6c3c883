// Test utilities shared across unit and integration tests
pub mod utils;
