//! Collaborator interfaces consumed by node listing.
//!
//! The strategy never talks to the remote system directly. It goes through these traits, which
//! are implemented by whatever client the application wires in.

use crate::models::{Location, NodeMetadata};
use crate::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use url::Url;
use vcloud_core::types::{Org, ReferenceType, Vdc};

/// Read-only access to the organization/VDC inventory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryClient: Send + Sync {
    /// Organizations currently known, keyed by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails.
    async fn list_orgs(&self) -> Result<BTreeMap<String, Org>>;

    /// Current contents of the VDC at `href`.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails.
    async fn get_vdc(&self, href: &Url) -> Result<Vdc>;
}

/// Outcome of a single detail lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLookup {
    /// The node record is available
    Found(Box<NodeMetadata>),
    /// The resource is enumerable but its record is not visible yet
    NotYetPresent,
}

impl DetailLookup {
    /// Lookup that found `node`.
    #[must_use]
    pub fn found(node: NodeMetadata) -> Self {
        Self::Found(Box::new(node))
    }
}

/// Fetches the fully-resolved record for one node.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NodeDetailFetcher: Send + Sync {
    /// Look up the node whose canonical id is `id`.
    ///
    /// # Errors
    ///
    /// Returns an error for hard failures. Propagation lag is reported as
    /// [`DetailLookup::NotYetPresent`], never as an error.
    async fn get_node(&self, id: &str) -> Result<DetailLookup>;
}

/// Resolves the location a VDC maps to.
#[cfg_attr(test, mockall::automock)]
pub trait LocationResolver: Send + Sync {
    /// Location for the VDC referenced by `vdc`.
    ///
    /// # Errors
    ///
    /// Returns an error if no location matches.
    fn find_location(&self, vdc: &ReferenceType) -> Result<Location>;
}
