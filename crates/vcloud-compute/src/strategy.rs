//! Node listing over the organization/VDC inventory.

use crate::client::{InventoryClient, LocationResolver, NodeDetailFetcher};
use crate::convert::to_compute_metadata;
use crate::detail::DetailResolver;
use crate::filter::CandidateFilter;
use crate::models::{ComputeMetadata, NodeMetadata};
use crate::walk::InventoryWalk;
use crate::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use tracing::instrument::WithSubscriber;
use tracing::{debug, Dispatch};
use vcloud_core::config::ListNodesConfig;
use vcloud_core::retry::RetryPolicy;

/// Predicate over node summaries.
pub type NodePredicate<'a> = dyn Fn(&ComputeMetadata) -> bool + Send + Sync + 'a;

/// Lists the nodes a provider knows about.
#[async_trait]
pub trait ListNodesStrategy: Send + Sync {
    /// Summaries of every node.
    ///
    /// # Errors
    ///
    /// Returns the first collaborator error; nothing is returned for that call.
    async fn list_nodes(&self) -> Result<HashSet<ComputeMetadata>>;

    /// Full records of the nodes whose summary satisfies `filter`.
    ///
    /// The result may be incomplete: nodes whose record is not yet visible after all lookup
    /// attempts are left out without an error.
    ///
    /// # Errors
    ///
    /// Returns the first collaborator error; nothing is returned for that call.
    async fn list_details_on_nodes_matching(
        &self,
        filter: &NodePredicate<'_>,
    ) -> Result<HashSet<NodeMetadata>>;
}

/// Builder for [`VdcListNodesStrategy`].
pub struct VdcListNodesStrategyBuilder {
    client: Arc<dyn InventoryClient>,
    details: Arc<dyn NodeDetailFetcher>,
    locations: Arc<dyn LocationResolver>,
    filter: CandidateFilter,
    retry_policy: RetryPolicy,
    dispatch: Option<Dispatch>,
}

impl VdcListNodesStrategyBuilder {
    /// Start from the three collaborators, with no blacklist and the default retry policy.
    #[must_use]
    pub fn new(
        client: Arc<dyn InventoryClient>,
        details: Arc<dyn NodeDetailFetcher>,
        locations: Arc<dyn LocationResolver>,
    ) -> Self {
        Self {
            client,
            details,
            locations,
            filter: CandidateFilter::default(),
            retry_policy: RetryPolicy::default(),
            dispatch: None,
        }
    }

    /// Blacklist from a comma-separated list of vApp names; absent or blank means none.
    #[must_use]
    pub fn with_blacklist(mut self, names: Option<&str>) -> Self {
        self.filter = CandidateFilter::from_list(names);
        self
    }

    /// Override the detail lookup retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry_policy = retry;
        self
    }

    /// Apply blacklist and retry settings from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn with_config(self, config: &ListNodesConfig) -> Result<Self> {
        let config = config.clone().validated()?;
        Ok(self
            .with_blacklist(config.blacklist_nodes.as_deref())
            .with_retry_policy(config.retry_policy()))
    }

    /// Send listing diagnostics to `dispatch` instead of the ambient subscriber.
    #[must_use]
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    /// Build the strategy.
    #[must_use]
    pub fn build(self) -> VdcListNodesStrategy {
        VdcListNodesStrategy {
            client: self.client,
            locations: self.locations,
            filter: self.filter,
            resolver: DetailResolver::with_retry_policy(self.details, self.retry_policy),
            dispatch: self.dispatch,
        }
    }
}

/// Lists vApps as nodes by walking every VDC of every organization.
///
/// Each call re-reads the inventory; nothing is cached between calls. Remote calls are
/// sequential awaits on the caller's task, made strictly one after another (organizations, then
/// each VDC, then each detail lookup). Nothing is spawned or joined concurrently, and the listing
/// future yields to the runtime only while a collaborator call is pending. A listing costs one
/// round trip per VDC plus up to the retry limit per matching node.
///
/// The strategy holds no per-call state and can be shared behind an [`Arc`] as long as its
/// collaborators tolerate concurrent use.
pub struct VdcListNodesStrategy {
    client: Arc<dyn InventoryClient>,
    locations: Arc<dyn LocationResolver>,
    filter: CandidateFilter,
    resolver: DetailResolver,
    dispatch: Option<Dispatch>,
}

impl VdcListNodesStrategy {
    /// Start a builder.
    #[must_use]
    pub fn builder(
        client: Arc<dyn InventoryClient>,
        details: Arc<dyn NodeDetailFetcher>,
        locations: Arc<dyn LocationResolver>,
    ) -> VdcListNodesStrategyBuilder {
        VdcListNodesStrategyBuilder::new(client, details, locations)
    }

    /// The candidate filter in use.
    #[must_use]
    pub const fn filter(&self) -> &CandidateFilter {
        &self.filter
    }

    /// The detail lookup retry policy in use.
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        self.resolver.retry_policy()
    }

    async fn collect_nodes(&self) -> Result<HashSet<ComputeMetadata>> {
        let mut nodes = HashSet::new();
        let mut walk = InventoryWalk::start(self.client.as_ref()).await?;

        while let Some((vdc, resource)) = walk.next_entry().await? {
            if self.filter.accepts(&resource) {
                let summary = to_compute_metadata(self.locations.as_ref(), &vdc, &resource)?;
                nodes.insert(summary);
            }
        }

        debug!(nodes = nodes.len(), "listed nodes");
        Ok(nodes)
    }

    async fn collect_details(
        &self,
        predicate: &NodePredicate<'_>,
    ) -> Result<HashSet<NodeMetadata>> {
        let mut nodes = HashSet::new();
        let mut walk = InventoryWalk::start(self.client.as_ref()).await?;

        while let Some((vdc, resource)) = walk.next_entry().await? {
            if !self.filter.accepts(&resource) {
                continue;
            }
            let summary = to_compute_metadata(self.locations.as_ref(), &vdc, &resource)?;
            if !predicate(&summary) {
                continue;
            }
            if let Some(node) = self.resolver.resolve(&vdc, &resource).await? {
                nodes.insert(node);
            }
        }

        debug!(nodes = nodes.len(), "listed node details");
        Ok(nodes)
    }

    async fn dispatched<F>(&self, call: F) -> F::Output
    where
        F: Future + Send,
    {
        match &self.dispatch {
            Some(dispatch) => call.with_subscriber(dispatch.clone()).await,
            None => call.await,
        }
    }
}

#[async_trait]
impl ListNodesStrategy for VdcListNodesStrategy {
    async fn list_nodes(&self) -> Result<HashSet<ComputeMetadata>> {
        self.dispatched(self.collect_nodes()).await
    }

    async fn list_details_on_nodes_matching(
        &self,
        filter: &NodePredicate<'_>,
    ) -> Result<HashSet<NodeMetadata>> {
        self.dispatched(self.collect_details(filter)).await
    }
}
