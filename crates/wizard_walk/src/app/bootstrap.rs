use tracing::info;
use tracing_subscriber::EnvFilter;
use walk_engine::{Font, HttpAssetProvider, LoopConfig, Scene};

use super::config::GameConfig;
use super::gameplay::{self, StartupError, WizardArchiveSource, WizardWalkScene};

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
}

pub(crate) fn build_app() -> Result<AppWiring, StartupError> {
    init_tracing();
    info!(version = env!("CARGO_PKG_VERSION"), "startup");

    let game_config = GameConfig::default();
    info!(
        target_character_id = game_config.target_character_id,
        "game_config_loaded"
    );

    let characters = WizardArchiveSource::new(
        HttpAssetProvider::default(),
        game_config.wizard_archive_url.clone(),
    )?;
    let assets = gameplay::load_startup_assets(characters.provider(), &characters, &game_config)?;

    let config = game_config.loop_config();
    let scene = WizardWalkScene::new(game_config, assets, Box::new(characters), Font::default());

    Ok(AppWiring {
        config,
        scene: Box::new(scene),
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
