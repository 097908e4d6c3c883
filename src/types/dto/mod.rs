// Request and response payloads
pub mod common;
pub mod items;
