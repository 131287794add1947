//! Use-case services.
//!
//! Services validate caller input before anything reaches storage, then hand
//! validated records to the repository ports. Errors are propagated, never
//! swallowed.

mod author_service;
mod post_service;

pub use author_service::AuthorService;
pub use post_service::PostService;
