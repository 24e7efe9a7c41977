//! Records and request/response models for the API
//!
//! Records are what the stores hold; the request and response types are
//! the DTOs (Data Transfer Objects) for HTTP bodies.

pub mod records;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use records::{Book, BookId, SecurityQuestion, User};
pub use requests::{BookRequest, SecurityAnswer};
pub use responses::{HealthResponse, MessageResponse};
