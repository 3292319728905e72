//! Follows one bus on a map: a map context initialized at a start coordinate
//! and a cancellable poller that moves its marker to the position reported by
//! `GET /update_location/{id}` every few seconds.

pub mod background_processing;
pub mod config;
pub mod error;
pub mod location;
pub mod logging;
pub mod map;
pub mod model;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use background_processing::poller::{spawn_location_poller, PollSettings, PollerHandle};
pub use config::Config;
pub use error::{TrackerError, TrackerResult};
pub use location::source::{HttpLocationSource, LocationSource};
pub use map::context::{MapContext, MapSettings};
pub use map::renderer::{LogRenderer, MapRenderer};
pub use map::tile::{TileCoord, TileLayer};
pub use model::coordinate::Coordinate;
pub use model::entity::EntityId;
pub use model::events::{MarkerMove, PollEvent};
pub use model::types::SharedMap;
