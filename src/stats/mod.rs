mod aggregate;
mod client;
mod error;
mod model;
mod report;
mod states;

pub use aggregate::Aggregator;
pub use client::{ApiClient, DEFAULT_BASE_URL, Endpoint};
pub use error::Error;
pub use model::{LocationRecord, StatsSummary};
pub use report::render;
