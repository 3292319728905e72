pub const EARTH_RADIUS: f64 = 6_371_000.0;

pub const UPDATE_LOCATION_PATH: &str = "update_location";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_ENTITY_ID: &str = "1";
pub const DEFAULT_CONTAINER: &str = "map";

pub const DEFAULT_ZOOM: u8 = 13;
pub const MAX_ZOOM: u8 = 22;
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_SUBDOMAIN: &str = "a";
pub const DEFAULT_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Amritsar railway station.
pub const DEFAULT_START_LATITUDE: f64 = 31.6330;
pub const DEFAULT_START_LONGITUDE: f64 = 74.8720;

pub const POLL_INTERVAL_MILLIS: u64 = 5000;
pub const REQUEST_TIMEOUT_MILLIS: u64 = 4000;
pub const POLL_EVENTS_CAPACITY: usize = 32;

pub const DEFAULT_CONFIG_PATH: &str = "tracker.toml";
pub const LOG_PATTERN: &str = "{d} - {l} - {m}\n";
