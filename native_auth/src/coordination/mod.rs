//! Orchestration of provider flows
//!
//! [`AuthClient`] resolves the provider, runs its flow through a
//! [`NativeBridge`](crate::bridge::NativeBridge), builds the backend
//! credential and completes the sign-in or link against the
//! [`AuthBackend`](crate::backend::AuthBackend).
//!
//! - `client`: the client and its generic operations
//! - `legacy`: per-provider shorthands
//! - `errors`: the public error taxonomy

mod client;
mod errors;
mod legacy;
mod types;

pub use client::AuthClient;
pub use errors::AuthError;
pub use types::CredentialResult;
