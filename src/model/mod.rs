pub mod controller;
pub mod request;
pub mod selection;

pub use controller::{Controller, RunBlocked, RunState};
pub use request::LaunchRequest;
pub use selection::{SelectionKind, SelectionSet};
