//! Per-tab view state. A session owns its data and is only mutated through
//! `&mut self`; failed calls leave the previous data in place and set `error`.

pub mod banking;
pub mod pooling;
pub mod routes;

pub use banking::BankingSession;
pub use pooling::PoolingSession;
pub use routes::RoutesSession;
