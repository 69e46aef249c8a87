use super::Clock;
use crate::actor_framework::{Query, ResourceClient};
use crate::cook_actor::{CookError, CookProfileUpsert};
use crate::discovery::{browse_cooks, BrowseFilter, Listing};
use crate::domain::{CookPolicy, CookProfile, CookProfileUpdate, Principal, UserId};
use tracing::{debug, info, instrument};

/// Client for interacting with the cook profile actor.
#[derive(Clone)]
pub struct CookClient {
    inner: ResourceClient<CookProfile>,
    clock: Clock,
}

impl_client_methods!(CookClient, CookProfile, UserId, CookError, profile);

impl CookClient {
    pub fn new(inner: ResourceClient<CookProfile>, clock: Clock) -> Self {
        Self { inner, clock }
    }

    /// Create-if-absent, else patch. Only the cook may save their own profile.
    #[instrument(skip(self, by, update), fields(by = %by))]
    pub async fn save_profile(&self, by: &Principal, update: CookProfileUpdate) -> Result<CookProfile, CookError> {
        debug!("Sending request");
        let params = CookProfileUpsert {
            by: by.clone(),
            update,
            at: (self.clock)(),
        };
        let profile = self.inner.upsert(by.uid.clone(), params).await?;
        info!(cook_id = %profile.cook_id, "Cook profile saved");
        Ok(profile)
    }

    /// Commercial terms for order placement. A cook without a profile gets
    /// the default policy: pickup only, no fee, no minimum.
    #[instrument(skip(self))]
    pub async fn policy_for(&self, cook_id: UserId) -> Result<CookPolicy, CookError> {
        Ok(self
            .get_profile(cook_id)
            .await?
            .map(|profile| profile.policy())
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn browse(&self, filter: BrowseFilter) -> Result<Vec<Listing<CookProfile>>, CookError> {
        debug!("Sending request");
        let profiles = self.inner.query(Query::all()).await?;
        Ok(browse_cooks(profiles, &filter))
    }
}
