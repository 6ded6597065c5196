//! # GoCycle Core
//! 
//! Operator identity, credential store port, and the authentication service.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
