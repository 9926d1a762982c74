use thiserror::Error;
use tracing::info;
use walk_engine::{AssetError, AssetProvider, Image};

use crate::app::config::GameConfig;

use super::character::DirectionalSprites;
use super::wizard_assets::CharacterSource;

/// Everything fetched before the window opens.
#[derive(Debug, Clone)]
pub(crate) struct StartupAssets {
    pub(crate) world: Image,
    pub(crate) logo: Image,
    pub(crate) target: DirectionalSprites,
}

#[derive(Debug, Error)]
pub(crate) enum StartupError {
    #[error("failed to load world map: {0}")]
    WorldMap(#[source] AssetError),
    #[error("failed to load logo: {0}")]
    Logo(#[source] AssetError),
    #[error("failed to load target character {id}: {source}")]
    TargetCharacter {
        id: u32,
        #[source]
        source: AssetError,
    },
    #[error("invalid sprite pattern: {0}")]
    SpritePattern(#[from] regex::Error),
}

pub(crate) fn load_startup_assets(
    provider: &dyn AssetProvider,
    characters: &dyn CharacterSource,
    config: &GameConfig,
) -> Result<StartupAssets, StartupError> {
    let world = provider
        .fetch_image(&config.world_map_url)
        .map_err(StartupError::WorldMap)?;
    info!(
        asset = "world_map",
        width = world.width(),
        height = world.height(),
        "asset_fetched"
    );

    let logo = provider
        .fetch_image(&config.logo_url)
        .map_err(StartupError::Logo)?;
    info!(asset = "logo", width = logo.width(), height = logo.height(), "asset_fetched");

    let id = config.target_character_id;
    let target = characters
        .fetch_character(id)
        .map_err(|source| StartupError::TargetCharacter { id, source })?;
    info!(asset = "target_character", id, "asset_fetched");

    Ok(StartupAssets {
        world,
        logo,
        target,
    })
}
