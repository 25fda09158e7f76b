pub mod client;
pub mod contracts;
pub mod meter;

pub use client::{ApiClient, ApiError};
