//! HTTP protocol layer module
//!
//! Response assembly shared by every page handler, decoupled from the page
//! content that goes into the bodies.

pub mod response;

// Re-export commonly used builders
pub use response::{build_html_response, build_no_content_response, build_not_found_response};
