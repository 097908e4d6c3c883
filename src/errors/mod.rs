// Errors layer - Error type definitions
pub mod internal;

// Re-exports for convenience
pub use internal::InternalError;

#[cfg(test)]
mod internal_test;
