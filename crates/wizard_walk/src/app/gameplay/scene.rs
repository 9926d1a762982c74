use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info};
use walk_engine::{Canvas, Font, Image, InputSnapshot, Scene, SceneCommand};

use crate::app::config::GameConfig;

use super::character::Character;
use super::debounce::FrameDebounce;
use super::id_entry::{IdEntry, IdEntryEvent, PendingPresses};
use super::proximity::{has_arrived, is_visible, screen_position};
use super::startup::StartupAssets;
use super::types::{Location, Size};
use super::viewport::Viewport;
use super::wizard_assets::CharacterSource;
use super::world::World;

const SCALE_EPSILON: f64 = 1e-9;
const TEXT_COLOR: [u8; 4] = [236, 228, 206, 255];
const PROMPT_COLOR: [u8; 4] = [170, 160, 210, 255];
const BACKDROP_COLOR: [u8; 4] = [18, 14, 30, 255];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Logo,
    IdEntry,
    Play,
    Arrival,
}

/// Grows additively to full size, then holds before handing off.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LogoAnimation {
    step: f64,
    grown_frames: u32,
    held_frames: u32,
    hold_limit: u32,
}

impl LogoAnimation {
    fn new(step: f64, hold_limit: u32) -> Self {
        Self {
            step,
            grown_frames: 0,
            held_frames: 0,
            hold_limit,
        }
    }

    fn scale(&self) -> f64 {
        if self.step <= 0.0 {
            return 1.0;
        }
        (self.grown_frames as f64 * self.step).min(1.0)
    }

    fn is_full(&self) -> bool {
        self.step <= 0.0 || self.grown_frames as f64 * self.step >= 1.0 - SCALE_EPSILON
    }

    /// Advances one frame; true once the hold has run out.
    fn advance(&mut self) -> bool {
        if !self.is_full() {
            self.grown_frames += 1;
            return false;
        }
        if self.held_frames < self.hold_limit {
            self.held_frames += 1;
            return false;
        }
        true
    }
}

pub(crate) struct WizardWalkScene {
    config: GameConfig,
    viewport: Viewport,
    phase: Phase,
    logo: Image,
    logo_animation: LogoAnimation,
    id_entry: IdEntry,
    pending_presses: PendingPresses,
    debounce: FrameDebounce,
    world: World,
    character: Option<Character>,
    target: Character,
    characters: Box<dyn CharacterSource>,
    rng: StdRng,
    font: Font,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
}

impl WizardWalkScene {
    pub(crate) fn new(
        config: GameConfig,
        assets: StartupAssets,
        characters: Box<dyn CharacterSource>,
        font: Font,
    ) -> Self {
        let viewport = Viewport {
            window: config.window,
            config: config.viewport,
            walk_speed: config.walk_speed,
        };
        let rng = config
            .rng_seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            viewport,
            phase: Phase::Logo,
            logo: assets.logo,
            logo_animation: LogoAnimation::new(config.logo_scale_step, config.logo_hold_frames),
            id_entry: IdEntry::new(config.max_id_digits),
            pending_presses: PendingPresses::default(),
            debounce: FrameDebounce::default(),
            world: World::new(assets.world),
            character: None,
            target: Character::new(assets.target, Location::default()),
            characters,
            rng,
            font,
            started_at: None,
            finished_at: None,
            config,
        }
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn elapsed(&self) -> Option<Duration> {
        let started = self.started_at?;
        let finished = self.finished_at?;
        Some(finished.saturating_duration_since(started))
    }

    fn set_phase(&mut self, next: Phase) {
        info!(from = ?self.phase, to = ?next, "phase_changed");
        self.phase = next;
    }

    fn update_logo(&mut self) {
        if self.logo_animation.advance() {
            self.set_phase(Phase::IdEntry);
        }
    }

    fn update_id_entry(&mut self) -> SceneCommand {
        let Some(input) = self.pending_presses.next() else {
            return SceneCommand::None;
        };
        let Some(event) = self.id_entry.handle_input(&input) else {
            return SceneCommand::None;
        };
        self.debounce.arm(self.config.input_debounce_frames);
        match event {
            IdEntryEvent::Edited => {
                debug!(buffer = self.id_entry.as_str(), "id_buffer_changed");
                SceneCommand::None
            }
            IdEntryEvent::Invalid(reason) => SceneCommand::Abort(reason),
            IdEntryEvent::Confirmed(id) => match self.characters.fetch_character(id) {
                Ok(sprites) => {
                    self.character = Some(Character::new(sprites, Location::default()));
                    self.place_target();
                    self.started_at = Some(Instant::now());
                    self.pending_presses.clear();
                    self.set_phase(Phase::Play);
                    SceneCommand::None
                }
                Err(err) => {
                    error!(id, error = %err, "character_fetch_failed");
                    SceneCommand::Abort(format!("failed to load wizard {id}: {err}"))
                }
            },
        }
    }

    fn place_target(&mut self) {
        let world = self.world.size();
        self.target.loc = Location::new(
            self.rng.random_range(0..=world.width.max(0)),
            self.rng.random_range(0..=world.height.max(0)),
        );
        info!(x = self.target.loc.x, y = self.target.loc.y, "target_placed");
    }

    fn update_play(&mut self, input: &InputSnapshot) {
        let Some(character) = self.character.as_mut() else {
            return;
        };
        character.walk(input, &mut self.world, &self.viewport);
        let arrived = has_arrived(
            character.loc,
            self.target.loc,
            self.world.scroll,
            self.viewport.window,
            self.config.arrival_radius,
        );
        if arrived {
            self.finished_at = Some(Instant::now());
            let elapsed_secs = self.elapsed().map(|elapsed| elapsed.as_secs()).unwrap_or(0);
            info!(elapsed_secs, "arrival");
            self.set_phase(Phase::Arrival);
        }
    }

    fn render_logo(&self, canvas: &mut Canvas<'_>) {
        let scale = self.logo_animation.scale() as f32;
        if scale <= 0.0 {
            return;
        }
        let window = self.viewport.window;
        let width = (self.logo.width() as f32 * scale).round() as i32;
        let height = (self.logo.height() as f32 * scale).round() as i32;
        let x = (window.width - width) / 2;
        let y = (window.height - height) / 2;
        canvas.draw_image(self.logo.full(), x, y, scale, scale);
    }

    fn render_id_entry(&self, canvas: &mut Canvas<'_>) {
        canvas.clear(BACKDROP_COLOR);
        let line = self.font.line_height();
        let left = self.font.glyph_advance() * 2;
        let top = self.viewport.window.height / 3;
        canvas.draw_text("Enter your wizard ID:", &self.font, left, top, PROMPT_COLOR);
        let field = format!("{}_", self.id_entry.as_str());
        canvas.draw_text(&field, &self.font, left, top + line * 2, TEXT_COLOR);
        canvas.draw_text("Press Enter to walk", &self.font, left, top + line * 4, PROMPT_COLOR);
    }

    fn render_play(&self, canvas: &mut Canvas<'_>) {
        let window = self.viewport.window;
        canvas.draw_image(self.world.visible_region(window), 0, 0, 1.0, 1.0);

        let scale = self.config.sprite_scale;
        if is_visible(self.target.loc, self.world.scroll, window) {
            let on_screen = screen_position(self.target.loc, self.world.scroll);
            draw_sprite(canvas, self.target.sprite(), on_screen, scale);
        }
        if let Some(character) = &self.character {
            draw_sprite(canvas, character.sprite(), character.loc, scale);
        }
    }

    fn render_arrival(&self, canvas: &mut Canvas<'_>) {
        canvas.clear(BACKDROP_COLOR);
        let window = self.viewport.window;
        let scale = self.config.arrival_sprite_scale;
        let sprite_top = Location::new(window.width / 4, window.height / 5);
        if let Some(character) = &self.character {
            draw_sprite(canvas, character.sprite(), sprite_top, scale);
        }
        let target_at = Location::new(window.width / 2 + window.width / 8, sprite_top.y);
        draw_sprite(canvas, self.target.sprite(), target_at, scale);

        let headline = Font::with_scale(self.font.scale() * 2);
        let line = self.font.line_height();
        let text_top = window.height - line * 5 - headline.line_height();
        let left = self.font.glyph_advance() * 2;
        canvas.draw_text("You found the wizard!", &headline, left, text_top, TEXT_COLOR);
        let elapsed = self.elapsed().unwrap_or_default();
        canvas.draw_text(
            &format!("Time: {}", format_elapsed(elapsed)),
            &self.font,
            left,
            text_top + headline.line_height() + line,
            PROMPT_COLOR,
        );
    }
}

impl Scene for WizardWalkScene {
    fn update(&mut self, input: &InputSnapshot) -> SceneCommand {
        if self.phase == Phase::IdEntry {
            self.pending_presses.record(input);
        }
        if self.debounce.absorb() {
            return SceneCommand::None;
        }
        match self.phase {
            Phase::Logo => self.update_logo(),
            Phase::IdEntry => return self.update_id_entry(),
            Phase::Play => self.update_play(input),
            Phase::Arrival => {}
        }
        SceneCommand::None
    }

    fn render(&self, canvas: &mut Canvas<'_>) {
        match self.phase {
            Phase::Logo => self.render_logo(canvas),
            Phase::IdEntry => self.render_id_entry(canvas),
            Phase::Play => self.render_play(canvas),
            Phase::Arrival => self.render_arrival(canvas),
        }
    }

    fn layout(&self, _outside_width: u32, _outside_height: u32) -> (u32, u32) {
        let Size { width, height } = self.viewport.window;
        (width.max(1) as u32, height.max(1) as u32)
    }
}

fn draw_sprite(canvas: &mut Canvas<'_>, sprite: &Image, at: Location, scale: f32) {
    canvas.draw_image(sprite.full(), at.x, at.y, scale, scale);
}

/// Whole seconds, truncated.
pub(crate) fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs == 1 {
        "1 second".to_string()
    } else {
        format!("{secs} seconds")
    }
}
