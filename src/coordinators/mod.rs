// Coordinators layer - Workflow orchestration
//
// Coordinators turn one inbound request into store calls and an
// `Outcome`. They hold no per-request state.
pub mod item_coordinator;

pub use item_coordinator::ItemCoordinator;
