//! Resolves full node records, tolerating propagation lag.

use crate::client::{DetailLookup, NodeDetailFetcher};
use crate::models::NodeMetadata;
use crate::Result;
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, warn};
use vcloud_core::retry::RetryPolicy;
use vcloud_core::types::ReferenceType;

/// Fetches node records, retrying while the record is not yet visible.
///
/// A vApp can show up in its VDC before its own record can be fetched. A
/// [`DetailLookup::NotYetPresent`] outcome is retried up to the policy's attempt count (3 by
/// default, immediately). Errors are returned at once and never retried.
///
/// When every attempt reports the record missing, [`DetailResolver::resolve`] returns
/// `Ok(None)`: the node is left out rather than failing the listing, so listings can
/// under-report nodes created moments earlier. Callers cannot tell that apart from a node that
/// did not match, other than through the warnings logged here.
#[derive(Clone)]
pub struct DetailResolver {
    fetcher: Arc<dyn NodeDetailFetcher>,
    retry_policy: RetryPolicy,
}

impl DetailResolver {
    /// Resolver with the default retry policy.
    #[must_use]
    pub fn new(fetcher: Arc<dyn NodeDetailFetcher>) -> Self {
        Self::with_retry_policy(fetcher, RetryPolicy::default())
    }

    /// Resolver with an explicit retry policy.
    #[must_use]
    pub fn with_retry_policy(
        fetcher: Arc<dyn NodeDetailFetcher>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            fetcher,
            retry_policy,
        }
    }

    /// The retry policy in use.
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    /// Fetch the record for `resource`, listed in `vdc`.
    ///
    /// The fetcher is always called at least once, even for a policy of zero attempts.
    ///
    /// # Errors
    ///
    /// Propagates the fetcher's error unmodified on the first hard failure.
    pub async fn resolve(
        &self,
        vdc: &ReferenceType,
        resource: &ReferenceType,
    ) -> Result<Option<NodeMetadata>> {
        let id = resource.href_str();
        let max_attempts = self.retry_policy.max_attempts.max(1);
        let mut attempt = 0;

        while attempt < max_attempts {
            attempt += 1;
            match self.fetcher.get_node(id).await? {
                DetailLookup::Found(node) => {
                    debug!(resource = %resource.name, attempt, "resolved node");
                    return Ok(Some(*node));
                }
                DetailLookup::NotYetPresent => {
                    warn!(
                        resource = %resource.name,
                        vdc = %vdc.name,
                        attempt,
                        "vApp {} not yet present in vdc {}",
                        resource.name,
                        vdc.name
                    );
                }
            }

            if let Some(delay) = self.retry_policy.delay_after(attempt) {
                if !delay.is_zero() {
                    sleep(delay).await;
                }
            }
        }

        warn!(
            resource = %resource.name,
            vdc = %vdc.name,
            attempts = attempt,
            "giving up on vApp {}, omitting it from results",
            resource.name
        );
        Ok(None)
    }
}
