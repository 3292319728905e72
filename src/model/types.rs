use crate::map::context::MapContext;
use crate::model::events::PollEvent;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::Sender;

pub type SharedMap = Arc<Mutex<MapContext>>;
pub type EventSender = Sender<PollEvent>;
