// Intake wizard: session data, the stage state machine, the in-memory
// session registry, and the HTTP handlers that drive it.

pub mod handlers;
pub mod models;
pub mod session;
pub mod store;
