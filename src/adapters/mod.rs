// Adapters layer: HTTP implementations of the domain ports.

pub mod banking;
pub mod http;
pub mod pooling;
pub mod routes;

pub use banking::BankingApi;
pub use http::ApiClient;
pub use pooling::PoolingApi;
pub use routes::RouteApi;
