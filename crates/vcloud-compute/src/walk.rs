//! Walks the organization → VDC → resource hierarchy.

use crate::client::InventoryClient;
use crate::Result;
use std::collections::btree_map::IntoValues;
use std::collections::VecDeque;
use tracing::debug;
use vcloud_core::types::ReferenceType;

/// One-shot walk over every resource entity of every VDC of every organization.
///
/// VDC references are collected up front from the organizations; the contents of each VDC are
/// fetched only when the walk reaches it. Remote calls are made one at a time, in the iteration
/// order of the underlying maps. A walk cannot be restarted: call [`InventoryWalk::start`] again
/// to re-fetch the inventory.
pub struct InventoryWalk<'a, C: ?Sized> {
    client: &'a C,
    pending: VecDeque<ReferenceType>,
    current: Option<(ReferenceType, IntoValues<String, ReferenceType>)>,
}

impl<'a, C> InventoryWalk<'a, C>
where
    C: InventoryClient + ?Sized,
{
    /// Fetch the organizations and queue their VDCs.
    ///
    /// # Errors
    ///
    /// Propagates the client's error unmodified.
    pub async fn start(client: &'a C) -> Result<Self> {
        let orgs = client.list_orgs().await?;
        let pending = orgs
            .into_values()
            .flat_map(|org| org.vdcs.into_values())
            .collect();

        Ok(Self {
            client,
            pending,
            current: None,
        })
    }

    /// Next (VDC, resource) pair, or `None` once the inventory is exhausted.
    ///
    /// # Errors
    ///
    /// Propagates the client's error unmodified. The walk should be dropped afterwards.
    pub async fn next_entry(&mut self) -> Result<Option<(ReferenceType, ReferenceType)>> {
        loop {
            if let Some((vdc, resources)) = &mut self.current {
                if let Some(resource) = resources.next() {
                    return Ok(Some((vdc.clone(), resource)));
                }
            }

            let Some(vdc) = self.pending.pop_front() else {
                self.current = None;
                return Ok(None);
            };

            let contents = self.client.get_vdc(&vdc.href).await?;
            debug!(
                vdc = %vdc.name,
                resources = contents.resource_entities.len(),
                "fetched vdc"
            );
            self.current = Some((vdc, contents.resource_entities.into_values()));
        }
    }

    /// Number of VDCs not yet fetched.
    #[must_use]
    pub fn remaining_vdcs(&self) -> usize {
        self.pending.len()
    }
}
