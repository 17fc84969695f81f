// Composition root for the calendar service.
//
// Responsibilities
// - Read config from environment.
// - Install logging.
// - Wire the event store into the HTTP and GraphQL transports.
// - Serve until a shutdown signal, then drain within a bounded grace period.

pub mod config;
pub mod graphql;
pub mod http;
pub mod server;
pub mod state;
pub mod telemetry;
