//! HTTP access to the inspection backend

pub mod client;
pub mod constants;
pub mod error;

pub use client::{InspectionApi, InspectionClient};
pub use error::ApiError;
