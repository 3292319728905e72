pub mod coordinate;
pub mod entity;
pub mod events;
pub mod types;
