use crate::model::coordinate::Coordinate;
use crate::utils::constants::{DEFAULT_TILE_SUBDOMAIN, MAX_ZOOM};
use std::f64::consts::PI;

/// Background imagery source: a `{s}/{z}/{x}/{y}` url template plus its
/// attribution label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileLayer {
    pub fn new(url_template: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            attribution: attribution.into(),
        }
    }

    /// Slippy-map tile covering `point` at `zoom`.
    pub fn tile_for(point: &Coordinate, zoom: u8) -> TileCoord {
        let z = zoom.min(MAX_ZOOM);
        let n = 1_i64 << z;
        let x_raw = ((point.longitude() + 180.0) / 360.0 * n as f64).floor() as i64;
        let lat_rad = point.latitude().to_radians();
        let y_raw = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n as f64)
            .floor() as i64;

        TileCoord {
            x: (((x_raw % n) + n) % n) as u32,
            y: y_raw.clamp(0, n - 1) as u32,
            z,
        }
    }

    pub fn url_for(&self, tile: TileCoord) -> String {
        self.url_template
            .replace("{s}", DEFAULT_TILE_SUBDOMAIN)
            .replace("{z}", &tile.z.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
    }
}
