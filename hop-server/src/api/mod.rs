//! HTTP API handlers for hop-server

pub mod error;
pub mod health;
pub mod interference;
pub mod physiology;
pub mod request;

pub use error::{ApiError, ApiResult};
pub use health::health_routes;
pub use interference::{interference, interference_query};
pub use physiology::{physiology_query, radar};
