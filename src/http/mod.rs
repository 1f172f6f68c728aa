//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the
//! handlers: body construction, freshness validation, query string parsing,
//! and response builders.

pub mod body;
pub mod cache;
pub mod query;
pub mod response;

// Re-export commonly used types
pub use body::ResponseBody;
pub use response::{
    build_404_response, build_500_response, build_html_response, build_image_response,
    build_not_modified_response,
};
