mod app;
mod effects;
mod render;

use anyhow::Result;
use finder_engine::ClientSettings;
use finder_logging::LogDestination;

fn main() -> Result<()> {
    finder_logging::initialize(LogDestination::File);

    let mut settings = ClientSettings::default();
    if let Ok(base_url) = std::env::var("FINDER_BASE_URL") {
        settings.base_url = base_url;
    }
    log::info!("starting against {}", settings.base_url);

    app::run(settings)
}
