//! Compute models produced by node listing.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Granularity of a [`Location`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationScope {
    /// The whole provider endpoint
    Provider,
    /// A zone, typically one VDC
    Zone,
    /// A single host
    Host,
}

/// Where a node runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Scope of this location
    pub scope: LocationScope,
    /// Location id; for zones this is the VDC href
    pub id: String,
    /// Human-readable description
    pub description: String,
    /// Enclosing location, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Location>>,
}

impl Location {
    /// Create a location without a parent.
    #[must_use]
    pub fn new(
        scope: LocationScope,
        id: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            scope,
            id: id.into(),
            description: description.into(),
            parent: None,
        }
    }

    /// Attach an enclosing location.
    #[must_use]
    pub fn with_parent(mut self, parent: Location) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// This location followed by its ancestors, innermost first.
    pub fn ancestry(&self) -> impl Iterator<Item = &Location> {
        std::iter::successors(Some(self), |location| location.parent.as_deref())
    }
}

/// Kind of compute entity a summary describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputeType {
    /// A running or provisionable node
    Node,
    /// A bootable image
    Image,
    /// A hardware profile
    Hardware,
}

/// Lightweight summary of a node, built without a detail fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComputeMetadata {
    /// Kind of entity
    #[serde(rename = "type")]
    pub compute_type: ComputeType,
    /// Id assigned by the provider
    pub provider_id: String,
    /// Display name
    pub name: String,
    /// Portable id
    pub id: String,
    /// Resolved location
    pub location: Location,
}

impl ComputeMetadata {
    /// Create a node summary whose id and provider id are both `id`.
    #[must_use]
    pub fn node(id: impl Into<String>, name: impl Into<String>, location: Location) -> Self {
        let id = id.into();
        Self {
            compute_type: ComputeType::Node,
            provider_id: id.clone(),
            name: name.into(),
            id,
            location,
        }
    }
}

impl fmt::Display for ComputeMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]@{}", self.name, self.id, self.location.id)
    }
}

/// Lifecycle state of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeState {
    /// Being created or changing state
    Pending,
    /// Powered on
    Running,
    /// Powered off
    Suspended,
    /// Deleted
    Terminated,
    /// Provider reported an error
    Error,
    /// Not mapped
    #[default]
    Unrecognized,
}

/// Fully-resolved node record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeMetadata {
    /// Portable id
    pub id: String,
    /// Id assigned by the provider
    pub provider_id: String,
    /// Display name
    pub name: String,
    /// Resolved location
    pub location: Location,
    /// Group tag the node was created under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Lifecycle state
    #[serde(default)]
    pub state: NodeState,
    /// Publicly routable addresses
    #[serde(default)]
    pub public_addresses: BTreeSet<String>,
    /// Private addresses
    #[serde(default)]
    pub private_addresses: BTreeSet<String>,
    /// User metadata
    #[serde(default)]
    pub user_metadata: BTreeMap<String, String>,
}

impl NodeMetadata {
    /// Create a node record whose id and provider id are both `id`.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Location) -> Self {
        let id = id.into();
        Self {
            provider_id: id.clone(),
            id,
            name: name.into(),
            location,
            tag: None,
            state: NodeState::default(),
            public_addresses: BTreeSet::new(),
            private_addresses: BTreeSet::new(),
            user_metadata: BTreeMap::new(),
        }
    }

    /// Set the group tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the lifecycle state.
    #[must_use]
    pub const fn with_state(mut self, state: NodeState) -> Self {
        self.state = state;
        self
    }

    /// Add a public address.
    #[must_use]
    pub fn with_public_address(mut self, address: impl Into<String>) -> Self {
        self.public_addresses.insert(address.into());
        self
    }

    /// Add a private address.
    #[must_use]
    pub fn with_private_address(mut self, address: impl Into<String>) -> Self {
        self.private_addresses.insert(address.into());
        self
    }

    /// Add a user metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.user_metadata.insert(key.into(), value.into());
        self
    }

    /// The summary view of this node.
    #[must_use]
    pub fn summary(&self) -> ComputeMetadata {
        ComputeMetadata {
            compute_type: ComputeType::Node,
            provider_id: self.provider_id.clone(),
            name: self.name.clone(),
            id: self.id.clone(),
            location: self.location.clone(),
        }
    }
}
