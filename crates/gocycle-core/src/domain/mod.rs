//! # GoCycle Core - Domain Module
//! 
//! The operator identity and the public user shape derived from it.

pub mod identity;

pub use gocycle_shared::Role;
pub use identity::{AuthUser, Identity};
