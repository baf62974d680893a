//! Platform API client module

mod client;
mod traits;

pub use client::{ApiClient, ApiError};
pub use traits::ApiClientTrait;

#[cfg(test)]
pub use traits::MockApiClientTrait;
