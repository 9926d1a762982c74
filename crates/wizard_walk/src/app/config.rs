use std::time::Duration;

use walk_engine::LoopConfig;

use super::gameplay::{Size, ViewportConfig};

pub(crate) const WINDOW_TITLE: &str = "Forgotten Runes Wizard Walk";

const WORLD_MAP_URL: &str = "https://www.forgottenrunes.com/static/img/map/map.png";
const LOGO_URL: &str = "https://www.forgottenrunes.com/static/img/forgotten-runes-logo.png";
const WIZARD_ARCHIVE_URL: &str = "https://www.forgottenrunes.com/api/art/wizards/{id}.zip";
const DEFAULT_TARGET_CHARACTER_ID: u32 = 6;

#[derive(Debug, Clone)]
pub(crate) struct GameConfig {
    pub(crate) window: Size,
    pub(crate) walk_speed: i32,
    pub(crate) viewport: ViewportConfig,
    /// Per-axis strict distance for arrival; one 25px sprite at `sprite_scale`.
    pub(crate) arrival_radius: f32,
    pub(crate) sprite_scale: f32,
    pub(crate) arrival_sprite_scale: f32,
    pub(crate) logo_scale_step: f64,
    pub(crate) logo_hold_frames: u32,
    pub(crate) input_debounce_frames: u32,
    pub(crate) max_id_digits: usize,
    pub(crate) world_map_url: String,
    pub(crate) logo_url: String,
    /// `{id}` is replaced by the character identifier.
    pub(crate) wizard_archive_url: String,
    pub(crate) target_character_id: u32,
    /// Fixed seed for target placement; `None` seeds from the OS.
    pub(crate) rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Size::new(640, 480),
            walk_speed: 5,
            viewport: ViewportConfig::default(),
            arrival_radius: 25.0 * 1.5,
            sprite_scale: 1.5,
            arrival_sprite_scale: 4.0,
            logo_scale_step: 0.005,
            logo_hold_frames: 60,
            input_debounce_frames: 15,
            max_id_digits: 4,
            world_map_url: WORLD_MAP_URL.to_string(),
            logo_url: LOGO_URL.to_string(),
            wizard_archive_url: WIZARD_ARCHIVE_URL.to_string(),
            target_character_id: DEFAULT_TARGET_CHARACTER_ID,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    pub(crate) fn loop_config(&self) -> LoopConfig {
        LoopConfig {
            window_title: WINDOW_TITLE.to_string(),
            window_width: self.window.width.max(1) as u32,
            window_height: self.window.height.max(1) as u32,
            resizable: false,
            target_tps: 60,
            metrics_log_interval: Duration::from_secs(5),
            ..LoopConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_game_constants() {
        let config = GameConfig::default();
        assert_eq!(config.window, Size::new(640, 480));
        assert_eq!(config.walk_speed, 5);
        assert_eq!(config.viewport.center_bias, 40);
        assert_eq!(config.viewport.edge_margin, 75);
        assert!((config.arrival_radius - 37.5).abs() < f32::EPSILON);
        assert_eq!(config.input_debounce_frames, 15);
        assert_eq!(config.max_id_digits, 4);
        assert!(config.wizard_archive_url.contains("{id}"));
        assert_eq!(config.target_character_id, 6);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn loop_config_uses_fixed_window() {
        let loop_config = GameConfig::default().loop_config();
        assert_eq!(loop_config.window_title, WINDOW_TITLE);
        assert_eq!((loop_config.window_width, loop_config.window_height), (640, 480));
        assert!(!loop_config.resizable);
    }
}
