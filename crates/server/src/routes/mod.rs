pub mod fund;
pub mod health;
pub mod members;
pub mod proposals;
pub mod registry;
pub mod root;

pub use registry::{API_VERSION, RegisterRoute, RouteRegistry};
