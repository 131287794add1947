//! # Quill Core
//!
//! The domain layer of the Quill blog store.
//! Entities, their field validators, the storage ports and the use-case services.
//! This crate has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError, ValidationError};
