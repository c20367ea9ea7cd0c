//! Node listing for vCloud.
//!
//! Walks every VDC of every organization, keeps the vApps that are not blacklisted and reports
//! them as nodes, either as lightweight [`ComputeMetadata`] summaries or as full
//! [`NodeMetadata`] records fetched one by one.
//!
//! The remote system is reached only through the traits in [`client`]. Listing is sequential
//! and uncached: every call re-reads the inventory, one remote call at a time.

#![deny(missing_docs)]

pub mod client;
pub mod convert;
pub mod detail;
pub mod filter;
pub mod location;
pub mod models;
pub mod predicates;
pub mod strategy;
pub mod walk;

#[cfg(test)]
mod testing;

pub use client::{DetailLookup, InventoryClient, LocationResolver, NodeDetailFetcher};
pub use detail::DetailResolver;
pub use filter::CandidateFilter;
pub use location::KnownLocations;
pub use models::{ComputeMetadata, ComputeType, Location, LocationScope, NodeMetadata, NodeState};
pub use strategy::{
    ListNodesStrategy, NodePredicate, VdcListNodesStrategy, VdcListNodesStrategyBuilder,
};
pub use walk::InventoryWalk;

/// Convenient result alias that reuses the shared vCloud error type.
pub type Result<T> = vcloud_core::Result<T>;
