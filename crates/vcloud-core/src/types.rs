//! Core vCloud inventory types.
//!
//! The inventory is a read-only hierarchy: an [`Org`] names its virtual datacenters, and each
//! [`Vdc`] names its resource entities. Every link in the hierarchy is a [`ReferenceType`]
//! whose href is the canonical identifier of the referenced entity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

use crate::error::Result;

/// vCloud media type tags.
pub mod media_type {
    /// Organization
    pub const ORG_XML: &str = "application/vnd.vmware.vcloud.org+xml";
    /// Virtual datacenter
    pub const VDC_XML: &str = "application/vnd.vmware.vcloud.vdc+xml";
    /// Virtual application (a node)
    pub const VAPP_XML: &str = "application/vnd.vmware.vcloud.vApp+xml";
    /// Virtual application template
    pub const VAPP_TEMPLATE_XML: &str = "application/vnd.vmware.vcloud.vAppTemplate+xml";
    /// Media (ISO/floppy)
    pub const MEDIA_XML: &str = "application/vnd.vmware.vcloud.media+xml";
}

/// Reference to a remote entity: href, display name and declared media type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceType {
    /// Canonical identifier, usable to fetch further detail
    pub href: Url,
    /// Display name
    pub name: String,
    /// Declared media type tag
    #[serde(rename = "type")]
    pub media_type: String,
}

impl ReferenceType {
    /// Create a reference from an already parsed href.
    #[must_use]
    pub fn new(href: Url, name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            href,
            name: name.into(),
            media_type: media_type.into(),
        }
    }

    /// Create a reference, parsing the href.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidHref`] if `href` is not an absolute URL.
    pub fn parse(
        href: &str,
        name: impl Into<String>,
        media_type: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::new(Url::parse(href)?, name, media_type))
    }

    /// The href rendered as an ASCII string; this is the id handed to detail lookups.
    #[must_use]
    pub fn href_str(&self) -> &str {
        self.href.as_str()
    }

    /// Returns true if the declared media type equals `media_type`.
    #[must_use]
    pub fn is_type(&self, media_type: &str) -> bool {
        self.media_type == media_type
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.href)
    }
}

/// An organization and the virtual datacenters it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Org {
    /// Organization href
    pub href: Url,
    /// Organization name
    pub name: String,
    /// VDC references keyed by VDC name
    #[serde(default)]
    pub vdcs: BTreeMap<String, ReferenceType>,
}

impl Org {
    /// Create an organization with no VDCs.
    #[must_use]
    pub fn new(href: Url, name: impl Into<String>) -> Self {
        Self {
            href,
            name: name.into(),
            vdcs: BTreeMap::new(),
        }
    }

    /// Add a VDC reference, keyed by its name.
    #[must_use]
    pub fn with_vdc(mut self, vdc: ReferenceType) -> Self {
        self.vdcs.insert(vdc.name.clone(), vdc);
        self
    }
}

/// A virtual datacenter and its current resource entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vdc {
    /// VDC href
    pub href: Url,
    /// VDC name
    pub name: String,
    /// Resource entity references keyed by name
    #[serde(default)]
    pub resource_entities: BTreeMap<String, ReferenceType>,
}

impl Vdc {
    /// Create a VDC with no resource entities.
    #[must_use]
    pub fn new(href: Url, name: impl Into<String>) -> Self {
        Self {
            href,
            name: name.into(),
            resource_entities: BTreeMap::new(),
        }
    }

    /// Add a resource entity, keyed by its name.
    #[must_use]
    pub fn with_resource(mut self, resource: ReferenceType) -> Self {
        self.resource_entities.insert(resource.name.clone(), resource);
        self
    }

    /// A reference pointing at this VDC.
    #[must_use]
    pub fn to_reference(&self) -> ReferenceType {
        ReferenceType::new(self.href.clone(), self.name.clone(), media_type::VDC_XML)
    }
}
