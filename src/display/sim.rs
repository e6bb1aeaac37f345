//! Terminal simulator backend.
//!
//! Rasterizes the 1-bit frame into the terminal with half-block cells
//! (one character cell covers a 1×2 pixel pair), downscaled by the
//! smallest integer factor that makes the frame fit the terminal. Good
//! enough to stand in for the real panel on any development box.

use std::collections::HashMap;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, size as terminal_size, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::display::font::{font_for, MonoMetrics};
use crate::display::{DisplayError, FrameBuffer, Screen, SpriteId};
use crate::layout::TextMeasure;
use crate::model::{MonoImage, Tone};

/// Terminal-hosted screen.
///
/// Owns the terminal for its lifetime (raw mode + alternate screen, both
/// restored on drop), which is why logs go to a file.
pub struct SimScreen {
    frame: FrameBuffer,
    sprites: HashMap<SpriteId, MonoImage>,
    next_sprite: u32,
    out: io::Stdout,
    scale: u32,
    closing: bool,
}

impl SimScreen {
    /// Take over the terminal and create a frame of the given pixel size.
    pub fn new(width: u32, height: u32) -> Result<Self, DisplayError> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide)?;

        let (cols, rows) = terminal_size()?;
        Ok(Self {
            frame: FrameBuffer::new(width, height),
            sprites: HashMap::new(),
            next_sprite: 0,
            out,
            scale: fit_scale(width, height, cols, rows),
            closing: false,
        })
    }

    /// Direct access to the frame, for draw calls outside the trait.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }
}

impl TextMeasure for SimScreen {
    fn text_width(&self, text: &str, size: u32) -> u32 {
        MonoMetrics.text_width(text, size)
    }
}

impl Screen for SimScreen {
    fn size(&self) -> (u32, u32) {
        (self.frame.width(), self.frame.height())
    }

    fn clear(&mut self, tone: Tone) {
        self.frame.fill(tone);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: u32, tone: Tone) {
        let style = MonoTextStyle::new(font_for(size), binary(tone));
        let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.frame);
    }

    fn load_sprite(&mut self, image: MonoImage) -> SpriteId {
        self.next_sprite += 1;
        let id = SpriteId::new(self.next_sprite);
        self.sprites.insert(id, image);
        id
    }

    fn unload_sprite(&mut self, sprite: SpriteId) {
        self.sprites.remove(&sprite);
    }

    fn sprite_size(&self, sprite: SpriteId) -> Option<(u32, u32)> {
        self.sprites.get(&sprite).map(|img| (img.width(), img.height()))
    }

    fn draw_sprite(&mut self, sprite: SpriteId, x: i32, y: i32) {
        if let Some(image) = self.sprites.get(&sprite) {
            let raw = ImageRaw::<BinaryColor>::new(image.data(), image.width());
            let _ = Image::new(&raw, Point::new(x, y)).draw(&mut self.frame);
        }
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        let k = self.scale;
        let cols = self.frame.width().div_ceil(k);
        let rows = self.frame.height().div_ceil(2 * k);

        let mut fg = None;
        let mut bg = None;
        for row in 0..rows {
            queue!(self.out, MoveTo(0, row as u16))?;
            for col in 0..cols {
                let upper = palette(self.frame.get(col * k, row * 2 * k));
                let lower = palette(self.frame.get(col * k, row * 2 * k + k));
                if fg != Some(upper) {
                    queue!(self.out, SetForegroundColor(upper))?;
                    fg = Some(upper);
                }
                if bg != Some(lower) {
                    queue!(self.out, SetBackgroundColor(lower))?;
                    bg = Some(lower);
                }
                queue!(self.out, Print('\u{2580}'))?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }

    fn should_close(&mut self) -> Result<bool, DisplayError> {
        while event::poll(Duration::from_secs(0))? {
            match event::read()? {
                Event::Key(key) if is_quit(&key) => self.closing = true,
                Event::Resize(cols, rows) => {
                    self.scale = fit_scale(self.frame.width(), self.frame.height(), cols, rows);
                }
                _ => {}
            }
        }
        Ok(self.closing)
    }
}

impl Drop for SimScreen {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn binary(tone: Tone) -> BinaryColor {
    match tone {
        Tone::Foreground => BinaryColor::On,
        Tone::Background => BinaryColor::Off,
    }
}

/// Terminal colors mimicking the panel's dark-ink-on-light-paper look.
fn palette(tone: Tone) -> Color {
    match tone {
        Tone::Foreground => Color::DarkGrey,
        Tone::Background => Color::Grey,
    }
}

/// Smallest integer downscale factor that fits the frame into the
/// terminal, with half-block cells covering two pixel rows each.
fn fit_scale(width: u32, height: u32, cols: u16, rows: u16) -> u32 {
    let cols = u32::from(cols.max(1));
    let rows = u32::from(rows.max(1));
    let sx = width.div_ceil(cols);
    let sy = height.div_ceil(rows * 2);
    sx.max(sy).max(1)
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
