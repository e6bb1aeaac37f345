//! The unit of fetched, displayable content.

use crate::display::{Screen, SpriteId};
use crate::model::MonoImage;

/// Title shown before the first successful fetch.
pub const PLACEHOLDER_TITLE: &str = "Loading...";

/// One fetched comic: id, title, and the image in whichever form it
/// currently takes.
///
/// # Lifecycle
///
/// Created as a placeholder, populated by the fetch pipeline on a
/// background thread, then finalized on the render thread: the raw raster
/// is handed to the screen exactly once via [`ComicRecord::load_sprite`]
/// and released exactly once via [`ComicRecord::take_sprite`] when the
/// record is displaced.
///
/// At most one of `raw_image` / `sprite` holds the pixel data at a time;
/// the handoff is an `Option::take`, so the transfer cannot be duplicated.
#[derive(Debug, Default)]
pub struct ComicRecord {
    /// Comic number, 0 when unset or unparsable.
    pub id: u32,
    /// Comic title, possibly empty.
    pub title: String,
    /// Remote image URL, empty for text-only records.
    pub image_url: String,
    raw_image: Option<MonoImage>,
    sprite: Option<SpriteId>,
    ready: bool,
}

impl ComicRecord {
    /// The empty placeholder shown until a fetch succeeds.
    pub fn placeholder() -> Self {
        Self {
            id: 0,
            title: PLACEHOLDER_TITLE.to_string(),
            image_url: String::new(),
            raw_image: None,
            sprite: None,
            ready: false,
        }
    }

    /// A record freshly populated by the fetch pipeline.
    ///
    /// `raw_image` is `None` for text-only records.
    pub fn fetched(id: u32, title: String, image_url: String, raw_image: Option<MonoImage>) -> Self {
        Self {
            id,
            title,
            image_url,
            raw_image,
            sprite: None,
            ready: false,
        }
    }

    /// Whether the record can be drawn.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The screen handle for the record's image, if one is loaded.
    pub fn sprite(&self) -> Option<SpriteId> {
        self.sprite
    }

    /// Whether the raw raster is still waiting to be loaded.
    pub fn has_raw_image(&self) -> bool {
        self.raw_image.is_some()
    }

    /// Materialize the screen sprite from the raw raster.
    ///
    /// Render-thread only: the screen backend is not safe to touch from
    /// the fetch thread. Records without an image become ready with no
    /// sprite. Idempotent once ready.
    pub fn load_sprite<S: Screen>(&mut self, screen: &mut S) {
        if self.ready {
            return;
        }
        if let Some(raw) = self.raw_image.take() {
            self.sprite = Some(screen.load_sprite(raw));
        }
        self.ready = true;
    }

    /// Give up the sprite handle so the caller can release it.
    ///
    /// Called on the displaced record during a slot swap. Returns `None`
    /// if the record never had an image or was already torn down, so a
    /// double swap cannot double-release.
    pub fn take_sprite(&mut self) -> Option<SpriteId> {
        self.ready = false;
        self.sprite.take()
    }
}
