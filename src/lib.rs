//! comicframe
//!
//! Fixed-size two-tone display app that rotates a remote comic card:
//! fetch the page on a timer, pull the id/title/image out of its metadata,
//! reduce the image to two tones, and render the card in a frame loop that
//! is never blocked by the network.
//!
//! Module layout follows the pure-core / impure-shell split: `layout` and
//! `model` are pure, `fetch` talks to the network on a background thread,
//! `refresh` hands completed records back to the render thread, and
//! `display` owns the screen.

pub mod app;
pub mod config;
pub mod display;
pub mod fetch;
pub mod layout;
pub mod logging;
pub mod model;
pub mod refresh;

#[cfg(test)]
mod test_support;
