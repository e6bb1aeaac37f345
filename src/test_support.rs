//! Shared stub implementations for unit tests.

#![allow(dead_code)]

use std::collections::HashMap;

use crate::display::{DisplayError, Screen, SpriteId};
use crate::layout::TextMeasure;
use crate::model::{MonoImage, Tone};

/// Deterministic metrics: `chars × size / 2`, like a half-advance
/// monospaced face. At size 20 every character is 10px wide.
pub struct FixedMetrics;

impl TextMeasure for FixedMetrics {
    fn text_width(&self, text: &str, size: u32) -> u32 {
        text.chars().count() as u32 * (size / 2).max(1)
    }
}

/// Recording screen: remembers every call so tests can assert on sprite
/// lifecycle and draw order without a terminal.
pub struct StubScreen {
    next_sprite: u32,
    sizes: HashMap<SpriteId, (u32, u32)>,
    loads: usize,
    unloads: Vec<SpriteId>,
    /// Text draw calls as `(text, x, y)`.
    pub texts: Vec<(String, i32, i32)>,
    /// Sprite draw calls as `(sprite, x, y)`.
    pub sprites_drawn: Vec<(SpriteId, i32, i32)>,
    /// Number of `clear` calls.
    pub clears: usize,
    /// Number of `present` calls.
    pub presents: usize,
}

impl StubScreen {
    /// An empty recording screen, 400×240 like the real panel.
    pub fn new() -> Self {
        Self {
            next_sprite: 0,
            sizes: HashMap::new(),
            loads: 0,
            unloads: Vec::new(),
            texts: Vec::new(),
            sprites_drawn: Vec::new(),
            clears: 0,
            presents: 0,
        }
    }

    /// How many sprites were loaded.
    pub fn loads(&self) -> usize {
        self.loads
    }

    /// Every sprite released, in release order.
    pub fn unloads(&self) -> &[SpriteId] {
        &self.unloads
    }

    /// Texts drawn since the last call, joined for convenience.
    pub fn drawn_text(&self) -> String {
        self.texts
            .iter()
            .map(|(text, _, _)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TextMeasure for StubScreen {
    fn text_width(&self, text: &str, size: u32) -> u32 {
        FixedMetrics.text_width(text, size)
    }
}

impl Screen for StubScreen {
    fn size(&self) -> (u32, u32) {
        (400, 240)
    }

    fn clear(&mut self, _tone: Tone) {
        self.clears += 1;
        self.texts.clear();
        self.sprites_drawn.clear();
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, _size: u32, _tone: Tone) {
        self.texts.push((text.to_string(), x, y));
    }

    fn load_sprite(&mut self, image: MonoImage) -> SpriteId {
        self.next_sprite += 1;
        self.loads += 1;
        let id = SpriteId::new(self.next_sprite);
        self.sizes.insert(id, (image.width(), image.height()));
        id
    }

    fn unload_sprite(&mut self, sprite: SpriteId) {
        self.sizes.remove(&sprite);
        self.unloads.push(sprite);
    }

    fn sprite_size(&self, sprite: SpriteId) -> Option<(u32, u32)> {
        self.sizes.get(&sprite).copied()
    }

    fn draw_sprite(&mut self, sprite: SpriteId, x: i32, y: i32) {
        self.sprites_drawn.push((sprite, x, y));
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.presents += 1;
        Ok(())
    }

    fn should_close(&mut self) -> Result<bool, DisplayError> {
        Ok(false)
    }
}
