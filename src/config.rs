use crate::background_processing::poller::PollSettings;
use crate::error::{TrackerError, TrackerResult};
use crate::map::context::MapSettings;
use crate::map::tile::TileLayer;
use crate::model::coordinate::Coordinate;
use crate::model::entity::EntityId;
use crate::utils::constants::*;
use log::LevelFilter;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Tracker settings. Read from an optional TOML file, then overridden by
/// `TRACKER_*` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub entity_id: EntityId,
    pub start_latitude: f64,
    pub start_longitude: f64,
    pub map: MapConfig,
    pub polling: PollingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub container: String,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub interval_ms: u64,
    /// Falls back to the default timeout, capped at `interval_ms`.
    pub request_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_owned(),
            entity_id: EntityId::from(DEFAULT_ENTITY_ID),
            start_latitude: DEFAULT_START_LATITUDE,
            start_longitude: DEFAULT_START_LONGITUDE,
            map: MapConfig::default(),
            polling: PollingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_owned(),
            zoom: DEFAULT_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_owned(),
            attribution: DEFAULT_ATTRIBUTION.to_owned(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: POLL_INTERVAL_MILLIS,
            request_timeout_ms: None,
        }
    }
}

impl PollingConfig {
    pub fn effective_request_timeout_ms(&self) -> u64 {
        self.request_timeout_ms
            .unwrap_or_else(|| REQUEST_TIMEOUT_MILLIS.min(self.interval_ms))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> TrackerResult<Self> {
        Self::load(
            env::var("TRACKER_CONFIG").ok().as_deref(),
            |key| env::var(key).ok(),
        )
    }

    /// An explicit `path` must exist; only the default `tracker.toml` may be
    /// missing.
    pub fn load(
        path: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> TrackerResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH)?,
            None => Self::default(),
        };
        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> TrackerResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> TrackerResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> TrackerResult<()> {
        if let Some(url) = lookup("TRACKER_SERVER_URL") {
            self.server_url = url;
        }
        if let Some(id) = lookup("TRACKER_ENTITY_ID") {
            self.entity_id = EntityId::from(id);
        }
        if let Some(raw) = lookup("TRACKER_START_LAT") {
            self.start_latitude = parse_var("TRACKER_START_LAT", &raw)?;
        }
        if let Some(raw) = lookup("TRACKER_START_LNG") {
            self.start_longitude = parse_var("TRACKER_START_LNG", &raw)?;
        }
        if let Some(raw) = lookup("TRACKER_POLL_INTERVAL_MS") {
            self.polling.interval_ms = parse_var("TRACKER_POLL_INTERVAL_MS", &raw)?;
        }
        if let Some(raw) = lookup("TRACKER_REQUEST_TIMEOUT_MS") {
            self.polling.request_timeout_ms = Some(parse_var("TRACKER_REQUEST_TIMEOUT_MS", &raw)?);
        }
        if let Some(level) = lookup("TRACKER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(file) = lookup("TRACKER_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(file));
        }
        Ok(())
    }

    pub fn validate(&self) -> TrackerResult<()> {
        self.start()?;
        Url::parse(&self.server_url)?;
        self.level_filter()?;
        if self.polling.interval_ms == 0 {
            return Err(TrackerError::Config(
                "polling interval must be greater than zero".to_owned(),
            ));
        }
        let request_timeout_ms = self.polling.effective_request_timeout_ms();
        if request_timeout_ms == 0 || request_timeout_ms > self.polling.interval_ms {
            return Err(TrackerError::Config(format!(
                "request timeout must be between 1 and {} ms",
                self.polling.interval_ms
            )));
        }
        if self.map.zoom > MAX_ZOOM {
            return Err(TrackerError::Config(format!(
                "zoom must not exceed {MAX_ZOOM}"
            )));
        }
        Ok(())
    }

    pub fn start(&self) -> TrackerResult<Coordinate> {
        Coordinate::new(self.start_latitude, self.start_longitude)
    }

    pub fn map_settings(&self) -> MapSettings {
        MapSettings {
            container: self.map.container.clone(),
            zoom: self.map.zoom,
            tile_layer: TileLayer::new(&self.map.tile_url, &self.map.attribution),
        }
    }

    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            interval: Duration::from_millis(self.polling.interval_ms),
            request_timeout: Duration::from_millis(self.polling.effective_request_timeout_ms()),
        }
    }

    pub fn level_filter(&self) -> TrackerResult<LevelFilter> {
        LevelFilter::from_str(&self.logging.level)
            .map_err(|_| TrackerError::Config(format!("unknown log level {}", self.logging.level)))
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> TrackerResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| TrackerError::Config(format!("{key} has an invalid value: {raw}")))
}
