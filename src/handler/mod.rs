// Handler module entry point
// Request dispatch and page production

pub mod pages;
pub mod router;

// Re-export the request entry point
pub use router::handle_request;
