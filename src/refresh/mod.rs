//! Double-buffered content refresh.
//!
//! Two record slots: `slots[0]` is on screen, `slots[1]` receives the
//! next fetch. The controller initiates at most one background fetch per
//! elapsed interval and hands the completed record back to the render
//! thread over a channel. The channel is the only cross-thread state, so
//! no locking is needed and the "at most one in flight" invariant is
//! structural.
//!
//! Sprite lifecycle is confined to [`RefreshController::poll`], which
//! only ever runs on the render thread: the displaced slot's sprite is
//! released exactly once and the incoming slot's raster is loaded there.

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use tracing::{info, warn};

use crate::display::Screen;
use crate::fetch::ContentFetcher;
use crate::model::{ComicRecord, FetchError};

/// Refresh state machine over two content slots.
pub struct RefreshController<F> {
    fetcher: F,
    interval: Duration,
    slots: [ComicRecord; 2],
    last_fetch: Option<Instant>,
    in_flight: bool,
    outcome_tx: Sender<Result<ComicRecord, FetchError>>,
    outcome_rx: Receiver<Result<ComicRecord, FetchError>>,
}

impl<F: ContentFetcher> RefreshController<F> {
    /// Create the controller with both slots holding the placeholder.
    ///
    /// The first [`RefreshController::tick`] initiates a fetch
    /// immediately; the interval gates every initiation after that.
    pub fn new(fetcher: F, interval: Duration) -> Self {
        let (outcome_tx, outcome_rx) = unbounded();
        Self {
            fetcher,
            interval,
            slots: [ComicRecord::placeholder(), ComicRecord::placeholder()],
            last_fetch: None,
            in_flight: false,
            outcome_tx,
            outcome_rx,
        }
    }

    /// The record currently on screen.
    pub fn current(&self) -> &ComicRecord {
        &self.slots[0]
    }

    /// Whether a fetch is currently running.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Initiate a background fetch if idle and the interval has elapsed.
    ///
    /// `last_fetch` is stamped at *initiation*, before the fetch
    /// completes, so a fetch outlasting the interval cannot trigger an
    /// overlapping one. Returns whether a fetch was started.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.in_flight {
            return false;
        }
        let due = match self.last_fetch {
            None => true,
            Some(at) => now.saturating_duration_since(at) >= self.interval,
        };
        if !due {
            return false;
        }

        self.last_fetch = Some(now);
        self.in_flight = true;
        let fetcher = self.fetcher.clone();
        let tx = self.outcome_tx.clone();
        thread::spawn(move || {
            // Runs to completion; there is no cancellation path. The send
            // only fails if the controller is gone, which ends the app.
            let _ = tx.send(fetcher.fetch());
        });
        true
    }

    /// Pick up a completed fetch and swap slots. Render thread only.
    ///
    /// On success the pending slot becomes current, the displaced slot's
    /// sprite is released, and the new slot's sprite is loaded; returns
    /// `true` so the caller refreshes its cached display lines. On
    /// failure the displayed record is untouched and the next interval
    /// retries.
    pub fn poll<S: Screen>(&mut self, screen: &mut S) -> bool {
        match self.outcome_rx.try_recv() {
            Ok(Ok(record)) => {
                self.in_flight = false;
                info!(id = record.id, title = %record.title, "swapping in fetched card");
                self.slots[1] = record;
                self.slots.swap(0, 1);
                if let Some(sprite) = self.slots[1].take_sprite() {
                    screen.unload_sprite(sprite);
                }
                self.slots[0].load_sprite(screen);
                true
            }
            Ok(Err(err)) => {
                warn!(error = %err, "refresh failed; keeping current card");
                self.in_flight = false;
                false
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => false,
        }
    }
}
