/// Error envelopes and their HTTP rendering
pub mod errors;
/// HTTP handlers and shared state
pub mod handlers;
/// Routes configuration and middleware
pub mod routes;
/// HTTP server implementation
pub mod server;
