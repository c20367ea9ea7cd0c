//! Ready-made predicates for [`crate::ListNodesStrategy::list_details_on_nodes_matching`].

use crate::models::ComputeMetadata;
use std::collections::HashSet;

/// Matches every node.
pub fn all() -> impl Fn(&ComputeMetadata) -> bool + Send + Sync {
    |_| true
}

/// Matches nodes whose id is one of `ids`.
pub fn with_ids<I, S>(ids: I) -> impl Fn(&ComputeMetadata) -> bool + Send + Sync
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let ids: HashSet<String> = ids.into_iter().map(Into::into).collect();
    move |node| ids.contains(&node.id)
}

/// Matches nodes with the given display name.
pub fn named(name: impl Into<String>) -> impl Fn(&ComputeMetadata) -> bool + Send + Sync {
    let name = name.into();
    move |node| node.name == name
}

/// Matches nodes located in `location_id` or in a location nested under it.
pub fn in_location(
    location_id: impl Into<String>,
) -> impl Fn(&ComputeMetadata) -> bool + Send + Sync {
    let location_id = location_id.into();
    move |node| node.location.ancestry().any(|l| l.id == location_id)
}
