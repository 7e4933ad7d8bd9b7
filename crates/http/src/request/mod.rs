//! Request types: the raw ambient request, the parsed immutable form, and
//! the per-request context handlers receive.

mod context;
mod method;
mod parsed;
mod raw;

pub use context::RequestContext;
pub use method::RequestMethod;
pub use parsed::{ParsedRequest, ROOT_SEGMENT};
pub use raw::RawRequest;
