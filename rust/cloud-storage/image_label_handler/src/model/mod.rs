pub mod event;
pub mod response;

pub use event::ObjectLocation;
pub use response::InvocationResult;
