use crate::error::TrackerError;
use crate::model::coordinate::Coordinate;
use crate::model::entity::EntityId;
use chrono::{DateTime, Local};

/// Result of one poll cycle, sent to the caller when an event channel is given.
#[derive(Debug)]
pub struct PollEvent {
    pub entity_id: EntityId,
    pub completed_at: DateTime<Local>,
    pub outcome: Result<MarkerMove, TrackerError>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerMove {
    pub from: Coordinate,
    pub to: Coordinate,
    pub distance_meters: f64,
}

impl PollEvent {
    pub(crate) fn new(entity_id: EntityId, outcome: Result<MarkerMove, TrackerError>) -> Self {
        Self {
            entity_id,
            completed_at: Local::now(),
            outcome,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}
