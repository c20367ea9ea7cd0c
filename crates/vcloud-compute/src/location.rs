//! Location lookup over a fixed set of known locations.

use crate::client::LocationResolver;
use crate::models::Location;
use crate::Result;
use vcloud_core::types::ReferenceType;
use vcloud_core::Error;

/// Resolves a VDC to the known location whose id is the VDC href.
///
/// A location also matches when one of its ancestors carries the VDC href, in which case the
/// location itself (not the ancestor) is returned. Locations are tried in the order given.
#[derive(Debug, Clone, Default)]
pub struct KnownLocations {
    locations: Vec<Location>,
}

impl KnownLocations {
    /// Resolver over `locations`.
    #[must_use]
    pub fn new(locations: impl IntoIterator<Item = Location>) -> Self {
        Self {
            locations: locations.into_iter().collect(),
        }
    }

    /// The known locations.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }
}

impl LocationResolver for KnownLocations {
    fn find_location(&self, vdc: &ReferenceType) -> Result<Location> {
        let href = vdc.href_str();
        self.locations
            .iter()
            .find(|location| location.ancestry().any(|l| l.id == href))
            .cloned()
            .ok_or_else(|| Error::LocationNotFound(href.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationScope;
    use vcloud_core::types::media_type;

    const VDC1: &str = "https://vcloud.example.com/api/v1.0/vdc/1";
    const VDC2: &str = "https://vcloud.example.com/api/v1.0/vdc/2";

    fn provider() -> Location {
        Location::new(LocationScope::Provider, "vcloud", "vCloud")
    }

    fn vdc(href: &str) -> ReferenceType {
        ReferenceType::parse(href, "vdc", media_type::VDC_XML).unwrap()
    }

    #[test]
    fn finds_zone_by_vdc_href() {
        let zone1 = Location::new(LocationScope::Zone, VDC1, "vdc 1").with_parent(provider());
        let zone2 = Location::new(LocationScope::Zone, VDC2, "vdc 2").with_parent(provider());
        let locations = KnownLocations::new([zone1, zone2.clone()]);

        assert_eq!(locations.find_location(&vdc(VDC2)).unwrap(), zone2);
    }

    #[test]
    fn matches_through_parent() {
        let zone = Location::new(LocationScope::Zone, VDC1, "vdc 1");
        let host = Location::new(LocationScope::Host, "host-7", "esx 7").with_parent(zone);
        let locations = KnownLocations::new([host.clone()]);

        assert_eq!(locations.find_location(&vdc(VDC1)).unwrap(), host);
    }

    #[test]
    fn unknown_vdc_is_an_error() {
        let locations = KnownLocations::new([provider()]);
        let err = locations.find_location(&vdc(VDC1)).unwrap_err();
        assert_eq!(err, Error::LocationNotFound(VDC1.to_string()));
        assert_eq!(err.error_code(), "LOCATION_NOT_FOUND");
    }

    #[test]
    fn empty_set_never_matches() {
        let locations = KnownLocations::default();
        assert!(locations.locations().is_empty());
        assert!(locations.find_location(&vdc(VDC1)).is_err());
    }
}
