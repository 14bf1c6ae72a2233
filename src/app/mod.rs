#[cfg(feature = "cli")]
pub mod commands;
pub mod session;
pub mod usecases;
