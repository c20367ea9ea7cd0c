//! Builds node summaries from inventory references.

use crate::client::LocationResolver;
use crate::models::ComputeMetadata;
use crate::Result;
use vcloud_core::types::ReferenceType;

/// Summary for `resource`, located through the VDC that lists it.
///
/// Id and provider id are both the resource href.
///
/// # Errors
///
/// Propagates the resolver's error unmodified.
pub fn to_compute_metadata<L>(
    locations: &L,
    vdc: &ReferenceType,
    resource: &ReferenceType,
) -> Result<ComputeMetadata>
where
    L: LocationResolver + ?Sized,
{
    let location = locations.find_location(vdc)?;
    Ok(ComputeMetadata::node(
        resource.href_str(),
        resource.name.clone(),
        location,
    ))
}
