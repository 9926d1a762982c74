use regex::Regex;
use tracing::{debug, info};
use walk_engine::{decode_image, ArchiveEntry, AssetError, AssetProvider, Image};

use super::character::DirectionalSprites;

const TURNAROUND_PATTERN: &str = r"^50/turnarounds/wizards-.+-(.+)\.png$";
const NO_BACKGROUND_PATTERN: &str = r"^50/wizards-.+-nobg\.png$";

/// Anything that can produce a character's sprites from its numeric identifier.
pub(crate) trait CharacterSource {
    fn fetch_character(&self, id: u32) -> Result<DirectionalSprites, AssetError>;
}

/// Picks directional sprites out of a wizard art archive.
#[derive(Debug, Clone)]
pub(crate) struct SpriteSelector {
    turnaround: Regex,
    no_background: Regex,
}

impl SpriteSelector {
    pub(crate) fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            turnaround: Regex::new(TURNAROUND_PATTERN)?,
            no_background: Regex::new(NO_BACKGROUND_PATTERN)?,
        })
    }

    /// Prefers the four turnaround views; falls back to one background-free sprite for all four.
    pub(crate) fn select(
        &self,
        entries: &[ArchiveEntry],
    ) -> Result<DirectionalSprites, AssetError> {
        let mut up: Option<Image> = None;
        let mut down: Option<Image> = None;
        let mut left: Option<Image> = None;
        let mut right: Option<Image> = None;

        for entry in entries {
            let Some(view) = self
                .turnaround
                .captures(&entry.name)
                .and_then(|captures| captures.get(1))
            else {
                continue;
            };
            let slot = match view.as_str() {
                "back" => &mut up,
                "front" => &mut down,
                "left" => &mut left,
                "right" => &mut right,
                _ => continue,
            };
            if slot.is_none() {
                debug!(entry = entry.name.as_str(), "reading_sprite_entry");
                *slot = Some(decode_image(&entry.name, &entry.bytes)?);
            }
        }

        if let (Some(up), Some(down), Some(left), Some(right)) = (up, down, left, right) {
            return Ok(DirectionalSprites {
                up,
                down,
                left,
                right,
            });
        }

        let fallback = entries
            .iter()
            .find(|entry| self.no_background.is_match(&entry.name))
            .ok_or_else(|| AssetError::MissingEntry {
                what: "wizard png file".to_string(),
            })?;
        debug!(entry = fallback.name.as_str(), "using_single_sprite");
        Ok(DirectionalSprites::uniform(decode_image(
            &fallback.name,
            &fallback.bytes,
        )?))
    }
}

pub(crate) fn archive_url(template: &str, id: u32) -> String {
    template.replace("{id}", &id.to_string())
}

/// Fetches wizard archives by identifier through an [`AssetProvider`].
pub(crate) struct WizardArchiveSource<P> {
    provider: P,
    url_template: String,
    selector: SpriteSelector,
}

impl<P: AssetProvider> WizardArchiveSource<P> {
    pub(crate) fn new(provider: P, url_template: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            provider,
            url_template: url_template.into(),
            selector: SpriteSelector::new()?,
        })
    }

    pub(crate) fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: AssetProvider> CharacterSource for WizardArchiveSource<P> {
    fn fetch_character(&self, id: u32) -> Result<DirectionalSprites, AssetError> {
        let url = archive_url(&self.url_template, id);
        let entries = self.provider.fetch_archive(&url)?;
        let sprites = self.selector.select(&entries)?;
        info!(id, url = url.as_str(), entry_count = entries.len(), "character_fetched");
        Ok(sprites)
    }
}
