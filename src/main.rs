use anyhow::Result;
use bus_tracker::utils::constants::POLL_EVENTS_CAPACITY;
use bus_tracker::{
    logging, spawn_location_poller, Config, HttpLocationSource, LogRenderer, MapContext, PollEvent,
};
use dotenv::dotenv;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;

    logging::init(&config.logging, config.level_filter()?)?;

    log::info!("Starting bus tracker for entity {}...", config.entity_id);

    let map = MapContext::initialize(
        config.start()?,
        config.map_settings(),
        Box::new(LogRenderer::new()),
    );
    log::info!(
        "Map '{}' ready with tiles from {} ({})",
        map.container(),
        map.tile_layer().url_template,
        map.tile_layer().attribution
    );
    let map = map.into_shared();
    let source = HttpLocationSource::new(&config.server_url)?;
    let (tx, mut rx) = mpsc::channel::<PollEvent>(POLL_EVENTS_CAPACITY);

    let poller = spawn_location_poller(
        map.clone(),
        source,
        config.entity_id.clone(),
        config.poll_settings(),
        Some(tx),
    );

    let mut failures_in_a_row = 0u32;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            event = rx.recv() => match event {
                Some(event) if event.is_success() => failures_in_a_row = 0,
                Some(_) => {
                    failures_in_a_row += 1;
                    if failures_in_a_row % 10 == 0 {
                        log::error!(
                            "No location for entity {} after {} attempts",
                            config.entity_id,
                            failures_in_a_row
                        );
                    }
                }
                None => break,
            },
        }
    }

    poller.stop().await;
    if let Ok(map) = map.lock() {
        log::info!("Bus tracker stopped, last position {}", map.marker());
    }

    Ok(())
}
