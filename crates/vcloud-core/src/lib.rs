//! # vcloud-core
//!
//! Core types and utilities for vCloud compute integrations.
//!
//! This crate provides the inventory model, error handling, retry policy and configuration
//! shared by node listing strategies.
//!
//! ## Modules
//!
//! - [`error`] - Error type and error codes
//! - [`types`] - Inventory types (organizations, VDCs, references, media types)
//! - [`retry`] - Bounded retry policy for lookups that may observe propagation lag
//! - [`config`] - Configuration for node listing

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod retry;
pub mod types;

// Re-export commonly used types
pub use config::ListNodesConfig;
pub use error::{Error, Result};
pub use retry::RetryPolicy;
pub use types::{media_type, Org, ReferenceType, Vdc};
