//! Request handler module
//!
//! Responsible for request routing dispatch and business logic processing:
//! the directory index, image rendering, and the per-request error boundary.

pub mod image;
pub mod index;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
