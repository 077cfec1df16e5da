//! Domain library for the movie catalog dashboard: configuration, telemetry,
//! catalog ingestion/cleaning, and pure dashboard view building. All rendering
//! side effects live in the api service crate.

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod telemetry;
