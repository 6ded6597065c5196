//! Repository traits (ports) and their implementations

pub mod credential_store;
pub mod static_store;

pub use credential_store::CredentialStore;
#[cfg(test)]
pub use credential_store::MockCredentialStore;
pub use static_store::StaticCredentialStore;
