pub mod request_context;
pub mod request_id;
pub mod request_source;

pub use {request_context::RequestContext, request_id::RequestId, request_source::RequestSource};
