use crate::error::{TrackerError, TrackerResult};
use crate::location::source::LocationSource;
use crate::model::entity::EntityId;
use crate::model::events::{MarkerMove, PollEvent};
use crate::model::types::{EventSender, SharedMap};
use crate::utils::constants::{POLL_INTERVAL_MILLIS, REQUEST_TIMEOUT_MILLIS};
use std::sync::{Arc, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    /// Time between the starts of two consecutive polls. Must be non-zero.
    pub interval: Duration,
    /// Upper bound for a single request. Never longer than `interval`.
    pub request_timeout: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(POLL_INTERVAL_MILLIS),
            request_timeout: Duration::from_millis(REQUEST_TIMEOUT_MILLIS),
        }
    }
}

/// Owner's side of a running poll loop. Dropping the handle leaves the loop
/// running; call [`PollerHandle::stop`] to tear it down.
#[derive(Debug)]
pub struct PollerHandle {
    entity_id: EntityId,
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl PollerHandle {
    pub fn entity_id(&self) -> &EntityId {
        &self.entity_id
    }

    /// Requests shutdown without waiting for it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancels the loop, including a request in flight, and waits for the
    /// task to exit. No request for this entity starts afterwards.
    pub async fn stop(self) {
        self.token.cancel();
        if let Err(err) = self.task.await {
            log::error!(
                "Location poller for entity {} ended abnormally: {}",
                self.entity_id,
                err
            );
        }
    }
}

pub fn spawn_location_poller(
    map: SharedMap,
    source: Arc<dyn LocationSource>,
    entity_id: EntityId,
    settings: PollSettings,
    events: Option<EventSender>,
) -> PollerHandle {
    let token = CancellationToken::new();
    let task = {
        let entity_id = entity_id.clone();
        let token = token.clone();
        tokio::spawn(async move {
            run_poll_loop(map, source, entity_id, settings, events, token).await
        })
    };

    PollerHandle {
        entity_id,
        token,
        task,
    }
}

async fn run_poll_loop(
    map: SharedMap,
    source: Arc<dyn LocationSource>,
    entity_id: EntityId,
    settings: PollSettings,
    events: Option<EventSender>,
    token: CancellationToken,
) {
    log::info!(
        "Polling location of entity {} every {:?}",
        entity_id,
        settings.interval
    );
    let mut ticker = tokio::time::interval(settings.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let outcome = tokio::select! {
            biased;
            _ = token.cancelled() => break,
            outcome = poll_once(&map, &source, &entity_id, settings.request_timeout) => outcome,
        };

        match &outcome {
            Ok(moved) => log::info!(
                "Entity {} moved {:.0} m to {}",
                entity_id,
                moved.distance_meters,
                moved.to
            ),
            Err(err) => log::warn!("Failed to update location of entity {}: {}", entity_id, err),
        }

        if let Some(events) = &events {
            match events.try_send(PollEvent::new(entity_id.clone(), outcome)) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    log::warn!("Poll event channel is full, dropping event for {}", entity_id)
                }
                Err(TrySendError::Closed(_)) => {
                    log::debug!("Poll event receiver for {} is gone", entity_id)
                }
            }
        }
    }

    log::info!("Stopped polling location of entity {}", entity_id);
}

/// Fetches one coordinate and applies it to the map.
pub async fn poll_once(
    map: &SharedMap,
    source: &Arc<dyn LocationSource>,
    entity_id: &EntityId,
    request_timeout: Duration,
) -> TrackerResult<MarkerMove> {
    let coordinate = tokio::time::timeout(request_timeout, source.clone().fetch(entity_id.clone()))
        .await
        .map_err(|_| TrackerError::Timeout(request_timeout))??;

    let mut map = map.lock().unwrap_or_else(PoisonError::into_inner);
    Ok(map.apply_location(coordinate))
}
