use crate::map::renderer::MapRenderer;
use crate::map::tile::TileLayer;
use crate::model::coordinate::Coordinate;
use crate::model::events::MarkerMove;
use crate::model::types::SharedMap;
use std::fmt;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSettings {
    /// Name of the element the view is bound to.
    pub container: String,
    pub zoom: u8,
    pub tile_layer: TileLayer,
}

/// The map view and its single marker. Created once by [`MapContext::initialize`]
/// and mutated in place by every successful poll.
pub struct MapContext {
    renderer: Box<dyn MapRenderer>,
    container: String,
    zoom: u8,
    tile_layer: TileLayer,
    center: Coordinate,
    marker: Coordinate,
}

impl MapContext {
    pub fn initialize(
        start: Coordinate,
        settings: MapSettings,
        mut renderer: Box<dyn MapRenderer>,
    ) -> Self {
        renderer.set_view(&settings.container, start, settings.zoom);
        renderer.add_tile_layer(&settings.tile_layer);
        renderer.place_marker(start);

        Self {
            renderer,
            container: settings.container,
            zoom: settings.zoom,
            tile_layer: settings.tile_layer,
            center: start,
            marker: start,
        }
    }

    pub fn into_shared(self) -> SharedMap {
        Arc::new(Mutex::new(self))
    }

    /// Moves the marker to `to` and recenters the view there at the
    /// configured zoom.
    pub fn apply_location(&mut self, to: Coordinate) -> MarkerMove {
        let from = self.marker;
        self.renderer.move_marker(to);
        self.marker = to;
        self.renderer.set_view(&self.container, to, self.zoom);
        self.center = to;

        MarkerMove {
            from,
            to,
            distance_meters: from.distance_to(&to),
        }
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn marker(&self) -> Coordinate {
        self.marker
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn tile_layer(&self) -> &TileLayer {
        &self.tile_layer
    }
}

impl fmt::Debug for MapContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapContext")
            .field("container", &self.container)
            .field("zoom", &self.zoom)
            .field("center", &self.center)
            .field("marker", &self.marker)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{map_settings, RecordingRenderer, RenderCall};

    #[test]
    fn initialize_centers_view_and_places_marker_at_start() {
        let renderer = RecordingRenderer::new();
        let calls = renderer.calls();
        let start = Coordinate::new(51.5, -0.12).unwrap();

        let map = MapContext::initialize(start, map_settings(), Box::new(renderer));

        assert_eq!(map.center(), start);
        assert_eq!(map.marker(), start);
        assert_eq!(map.zoom(), 13);
        assert_eq!(map.container(), "map");
        assert_eq!(
            *calls.lock().unwrap(),
            vec![
                RenderCall::SetView {
                    container: "map".to_owned(),
                    center: start,
                    zoom: 13
                },
                RenderCall::AddTileLayer(map_settings().tile_layer),
                RenderCall::PlaceMarker(start),
            ]
        );
    }

    #[test]
    fn apply_location_moves_marker_then_recenters() {
        let renderer = RecordingRenderer::new();
        let calls = renderer.calls();
        let start = Coordinate::new(51.5, -0.12).unwrap();
        let mut map = MapContext::initialize(start, map_settings(), Box::new(renderer));
        calls.lock().unwrap().clear();

        let to = Coordinate::new(10.0, 20.0).unwrap();
        let moved = map.apply_location(to);

        assert_eq!(map.marker(), to);
        assert_eq!(map.center(), to);
        assert_eq!(moved.from, start);
        assert_eq!(moved.to, to);
        assert!(moved.distance_meters > 0.0);
        assert_eq!(
            *calls.lock().unwrap(),
            vec![
                RenderCall::MoveMarker(to),
                RenderCall::SetView {
                    container: "map".to_owned(),
                    center: to,
                    zoom: 13
                },
            ]
        );
    }

    #[test]
    fn same_position_reports_zero_distance() {
        let start = Coordinate::new(31.633, 74.872).unwrap();
        let mut map =
            MapContext::initialize(start, map_settings(), Box::new(RecordingRenderer::new()));
        let moved = map.apply_location(start);
        assert_eq!(moved.distance_meters, 0.0);
    }
}
