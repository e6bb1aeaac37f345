//! Frame-loop glue: update and draw for the card.

use std::thread;
use std::time::{Duration, Instant};

use tracing::info;

use crate::config::ResolvedConfig;
use crate::display::{DisplayError, Screen};
use crate::fetch::ContentFetcher;
use crate::layout::{format_lines, wrap, LineBlock};
use crate::model::{ComicRecord, Tone};
use crate::refresh::RefreshController;

/// The comic card application.
///
/// Owns the screen and the refresh controller; generic over both so the
/// whole update/draw path runs against stubs in tests. Display lines are
/// cached and only recomputed when the visible slot changes.
pub struct CardApp<S, F> {
    screen: S,
    controller: RefreshController<F>,
    config: ResolvedConfig,
    block: LineBlock,
    dirty: bool,
}

impl<S: Screen, F: ContentFetcher> CardApp<S, F> {
    /// Wire up the app around a screen and a fetcher.
    ///
    /// The placeholder card is laid out immediately so the first frame
    /// has content before any fetch completes.
    pub fn new(screen: S, fetcher: F, config: ResolvedConfig) -> Self {
        let controller = RefreshController::new(fetcher, Duration::from_secs(config.refresh_secs));
        let mut app = Self {
            screen,
            controller,
            config,
            block: LineBlock::default(),
            dirty: true,
        };
        app.refresh_lines();
        app
    }

    /// One frame: drive the controller, pick up a completed fetch, and
    /// repaint if anything changed. Returns whether a swap happened.
    pub fn tick(&mut self, now: Instant) -> Result<bool, DisplayError> {
        self.controller.tick(now);

        let swapped = self.controller.poll(&mut self.screen);
        if swapped {
            self.refresh_lines();
            self.dirty = true;
        }

        if self.dirty {
            self.draw();
            self.screen.present()?;
            self.dirty = false;
        }

        Ok(swapped)
    }

    /// Run the fixed-rate frame loop until the screen closes.
    ///
    /// In single-shot mode the loop ends after the first successful
    /// fetch has been rendered.
    pub fn run(mut self) -> Result<(), crate::model::AppError> {
        let frame = Duration::from_millis(1000 / u64::from(self.config.frame_rate.max(1)));
        loop {
            let swapped = self.tick(Instant::now())?;
            if self.config.once && swapped {
                info!("single-shot render complete");
                return Ok(());
            }
            if self.screen.should_close()? {
                info!("screen closed");
                return Ok(());
            }
            thread::sleep(frame);
        }
    }

    /// The record currently on screen.
    pub fn current(&self) -> &ComicRecord {
        self.controller.current()
    }

    /// The cached title line block.
    pub fn block(&self) -> &LineBlock {
        &self.block
    }

    /// The screen, for assertions in tests.
    pub fn screen(&self) -> &S {
        &self.screen
    }

    fn refresh_lines(&mut self) {
        let lines = {
            let record = self.controller.current();
            wrap(
                &record.title,
                self.config.text_width,
                self.config.text_size,
                &self.screen,
            )
        };
        self.block = format_lines(
            lines,
            self.config.line_budget,
            self.config.screen_height,
            self.config.text_size,
        );
    }

    fn draw(&mut self) {
        self.screen.clear(Tone::Background);

        let record = self.controller.current();
        let padding = self.config.padding as i32;
        let image_box = self.config.image_box as i32;
        if let Some(sprite) = record.sprite() {
            if let Some((width, height)) = self.screen.sprite_size(sprite) {
                let x = padding + (image_box - width as i32) / 2;
                let y = padding + (image_box - height as i32) / 2;
                self.screen.draw_sprite(sprite, x, y);
            }
        }

        let size = self.config.text_size;
        let x = self.config.text_x;
        let top = self.block.offset;
        self.screen
            .draw_text(&format!("#{}", record.id), x, top, size, Tone::Foreground);
        for (index, line) in self.block.lines.iter().enumerate() {
            let y = top + size as i32 * (index as i32 + 1);
            self.screen.draw_text(line, x, y, size, Tone::Foreground);
        }
    }
}
