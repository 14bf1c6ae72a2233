//! Application use cases. Each one forwards to a port; only `fetch_routes`
//! adds behaviour (client-side filtering).

pub mod banking;
pub mod pooling;
pub mod routes;
