//! Data models and DTOs (Data Transfer Objects)
//!
//! Contains all request/response structures used by the API.

pub mod response;
pub mod table;

// Re-export commonly used types
pub use response::*;
pub use table::*;
