//! HTTP surface: routes, request/response models and error mapping

pub mod error;
pub mod models;
pub mod server;

pub use error::ApiError;
pub use models::{ErrorResponse, HealthResponse, SequenceRequest, WelcomeResponse};
pub use server::{build_router, ApiServer};
