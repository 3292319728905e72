use crate::error::TrackerResult;
use crate::location::source::LocationSource;
use crate::map::context::MapSettings;
use crate::map::renderer::MapRenderer;
use crate::map::tile::TileLayer;
use crate::model::coordinate::Coordinate;
use crate::model::entity::EntityId;
use crate::utils::constants::{DEFAULT_ATTRIBUTION, DEFAULT_CONTAINER, DEFAULT_TILE_URL};
use futures::future::BoxFuture;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

pub fn map_settings() -> MapSettings {
    MapSettings {
        container: DEFAULT_CONTAINER.to_owned(),
        zoom: 13,
        tile_layer: TileLayer::new(DEFAULT_TILE_URL, DEFAULT_ATTRIBUTION),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    SetView {
        container: String,
        center: Coordinate,
        zoom: u8,
    },
    AddTileLayer(TileLayer),
    PlaceMarker(Coordinate),
    MoveMarker(Coordinate),
}

/// Keeps every call so tests can inspect them after the renderer is boxed.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Arc<Mutex<Vec<RenderCall>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<RenderCall>>> {
        self.calls.clone()
    }

    fn record(&self, call: RenderCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl MapRenderer for RecordingRenderer {
    fn set_view(&mut self, container: &str, center: Coordinate, zoom: u8) {
        self.record(RenderCall::SetView {
            container: container.to_owned(),
            center,
            zoom,
        });
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.record(RenderCall::AddTileLayer(layer.clone()));
    }

    fn place_marker(&mut self, at: Coordinate) {
        self.record(RenderCall::PlaceMarker(at));
    }

    fn move_marker(&mut self, to: Coordinate) {
        self.record(RenderCall::MoveMarker(to));
    }
}

/// Hands out queued results in order, then keeps answering `fallback`.
pub struct ScriptedSource {
    responses: Mutex<VecDeque<TrackerResult<Coordinate>>>,
    fallback: Coordinate,
    requests: Mutex<Vec<(EntityId, Instant)>>,
}

impl ScriptedSource {
    pub fn new(
        responses: impl IntoIterator<Item = TrackerResult<Coordinate>>,
        fallback: Coordinate,
    ) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            fallback,
            requests: Mutex::new(vec![]),
        })
    }

    pub fn requests(&self) -> Vec<(EntityId, Instant)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_times(&self, entity_id: &EntityId) -> Vec<Instant> {
        self.requests()
            .into_iter()
            .filter(|(id, _)| id == entity_id)
            .map(|(_, at)| at)
            .collect()
    }
}

impl LocationSource for ScriptedSource {
    fn fetch(self: Arc<Self>, entity_id: EntityId) -> BoxFuture<'static, TrackerResult<Coordinate>> {
        Box::pin(async move {
            self.requests
                .lock()
                .unwrap()
                .push((entity_id, Instant::now()));
            let next = self.responses.lock().unwrap().pop_front();
            next.unwrap_or(Ok(self.fallback))
        })
    }
}

/// Never answers, for exercising the request timeout.
pub struct SilentSource;

impl LocationSource for SilentSource {
    fn fetch(self: Arc<Self>, _entity_id: EntityId) -> BoxFuture<'static, TrackerResult<Coordinate>> {
        Box::pin(futures::future::pending())
    }
}
