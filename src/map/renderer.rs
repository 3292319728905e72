use crate::map::tile::TileLayer;
use crate::model::coordinate::Coordinate;

/// Drawing surface the map context talks to. Implementations own whatever
/// widget, window or page element actually shows the map.
pub trait MapRenderer: Send {
    fn set_view(&mut self, container: &str, center: Coordinate, zoom: u8);

    fn add_tile_layer(&mut self, layer: &TileLayer);

    fn place_marker(&mut self, at: Coordinate);

    fn move_marker(&mut self, to: Coordinate);
}

/// Headless renderer that only writes what would be drawn to the log.
#[derive(Debug, Default)]
pub struct LogRenderer {
    tile_layer: Option<TileLayer>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line logged for a recenter, naming the center tile once a tile layer
    /// is attached.
    pub fn describe_view(&self, container: &str, center: Coordinate, zoom: u8) -> String {
        match &self.tile_layer {
            Some(layer) => {
                let tile = TileLayer::tile_for(&center, zoom);
                format!(
                    "View '{}' centered at {} (zoom {}), tile {}",
                    container,
                    center,
                    zoom,
                    layer.url_for(tile)
                )
            }
            None => format!("View '{}' centered at {} (zoom {})", container, center, zoom),
        }
    }
}

impl MapRenderer for LogRenderer {
    fn set_view(&mut self, container: &str, center: Coordinate, zoom: u8) {
        log::info!("{}", self.describe_view(container, center, zoom));
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        log::info!(
            "Tile layer {} added ({})",
            layer.url_template,
            layer.attribution
        );
        self.tile_layer = Some(layer.clone());
    }

    fn place_marker(&mut self, at: Coordinate) {
        log::info!("Marker placed at {}", at);
    }

    fn move_marker(&mut self, to: Coordinate) {
        log::info!("Marker moved to {}", to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::{DEFAULT_ATTRIBUTION, DEFAULT_TILE_URL};

    #[test]
    fn view_without_tile_layer_has_no_tile() {
        let renderer = LogRenderer::new();
        let london = Coordinate::new(51.5, -0.12).unwrap();

        assert_eq!(
            renderer.describe_view("map", london, 13),
            "View 'map' centered at (51.500000, -0.120000) (zoom 13)"
        );
    }

    #[test]
    fn recenter_reports_center_tile() {
        let mut renderer = LogRenderer::new();
        let london = Coordinate::new(51.5, -0.12).unwrap();
        renderer.add_tile_layer(&TileLayer::new(DEFAULT_TILE_URL, DEFAULT_ATTRIBUTION));
        renderer.set_view("map", london, 13);

        assert_eq!(
            renderer.describe_view("map", london, 13),
            "View 'map' centered at (51.500000, -0.120000) (zoom 13), \
             tile https://a.tile.openstreetmap.org/13/4093/2724.png"
        );
    }
}
