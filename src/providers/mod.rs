// Providers layer - Work performers used by coordinators and middleware
pub mod token_provider;

pub use token_provider::TokenProvider;
