use crate::error::{TrackerError, TrackerResult};
use crate::model::coordinate::{Coordinate, LocationUpdate};
use crate::model::entity::EntityId;
use crate::utils::constants::UPDATE_LOCATION_PATH;
use futures::future::BoxFuture;
use reqwest::Client;
use std::sync::Arc;
use url::Url;

/// Anything that can tell where an entity currently is.
pub trait LocationSource: Send + Sync + 'static {
    fn fetch(self: Arc<Self>, entity_id: EntityId) -> BoxFuture<'static, TrackerResult<Coordinate>>;
}

/// Fetches `GET {base_url}/update_location/{entity_id}`.
#[derive(Debug, Clone)]
pub struct HttpLocationSource {
    client: Client,
    base_url: Url,
}

impl HttpLocationSource {
    pub fn new(base_url: &str) -> TrackerResult<Arc<Self>> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> TrackerResult<Arc<Self>> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(TrackerError::Config(format!(
                "server url {base_url} cannot be used as a base"
            )));
        }
        Ok(Arc::new(Self { client, base_url }))
    }

    pub fn endpoint(&self, entity_id: &EntityId) -> TrackerResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                TrackerError::Config(format!("server url {} cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .push(UPDATE_LOCATION_PATH)
            .push(entity_id.as_str());
        Ok(url)
    }

    async fn request(&self, entity_id: &EntityId) -> TrackerResult<Coordinate> {
        let url = self.endpoint(entity_id)?;
        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(TrackerError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.bytes().await?;
        let update: LocationUpdate = serde_json::from_slice(&body)?;
        Coordinate::try_from(update)
    }
}

impl LocationSource for HttpLocationSource {
    fn fetch(self: Arc<Self>, entity_id: EntityId) -> BoxFuture<'static, TrackerResult<Coordinate>> {
        Box::pin(async move { self.request(&entity_id).await })
    }
}
