//! Screen abstraction and the shipped backend.
//!
//! [`Screen`] is the narrow interface the app draws through: two-tone
//! primitives, sprite lifecycle, and text measurement. The one shipped
//! implementation, [`sim::SimScreen`], rasterizes a 1-bit frame into the
//! terminal; the trait keeps everything above it backend-agnostic and
//! testable with stubs.
//!
//! Sprite creation and release are render-thread-only by contract: the
//! background fetch task produces raw [`MonoImage`] data and never touches
//! a screen.

pub mod font;
pub mod frame;
pub mod sim;

pub use font::MonoMetrics;
pub use frame::FrameBuffer;
pub use sim::SimScreen;

use crate::layout::TextMeasure;
use crate::model::{MonoImage, Tone};
use thiserror::Error;

/// Screen backend failures.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Terminal or output-device I/O error.
    #[error("Display IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle to a screen-resident image.
///
/// Minted by [`Screen::load_sprite`] and only meaningful to the screen
/// that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(u32);

impl SpriteId {
    /// Wrap a backend-assigned handle value.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The backend-assigned handle value.
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// The render surface the card is drawn on.
///
/// Implementations are not thread-safe and must only be touched from the
/// render thread. Draw calls affect an internal frame; nothing reaches the
/// output device until [`Screen::present`].
pub trait Screen: TextMeasure {
    /// Screen dimensions in pixels.
    fn size(&self) -> (u32, u32);

    /// Fill the whole frame with one tone.
    fn clear(&mut self, tone: Tone);

    /// Draw a line of text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: u32, tone: Tone);

    /// Take ownership of a raster and make it drawable.
    fn load_sprite(&mut self, image: MonoImage) -> SpriteId;

    /// Release a sprite. Unknown handles are ignored.
    fn unload_sprite(&mut self, sprite: SpriteId);

    /// Dimensions of a loaded sprite, if the handle is live.
    fn sprite_size(&self, sprite: SpriteId) -> Option<(u32, u32)>;

    /// Draw a sprite with its top-left corner at `(x, y)`.
    fn draw_sprite(&mut self, sprite: SpriteId, x: i32, y: i32);

    /// Push the frame to the output device.
    fn present(&mut self) -> Result<(), DisplayError>;

    /// Whether the user asked to close the screen.
    fn should_close(&mut self) -> Result<bool, DisplayError>;
}
