//! Image decode and two-tone transform.
//!
//! The display has two tones, so a decoded comic is reduced by a fixed
//! channel-sum cutoff (not a perceptual luminance formula; the panel's
//! look depends on this exact threshold) and then uniformly downscaled so
//! its longer side fits the image box.

use crate::model::{FetchError, MonoImage, Tone};
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, RgbaImage};

/// Channel-sum cutoff: `r + g + b` below this is ink.
const INK_CUTOFF: u16 = 255 / 3;

/// Decode `bytes` and produce the packed two-tone raster.
pub fn process_image(bytes: &[u8], max_size: u32) -> Result<MonoImage, FetchError> {
    let decoded = image::load_from_memory(bytes).map_err(|err| FetchError::ImageDecode {
        reason: err.to_string(),
    })?;
    Ok(two_tone(&decoded.to_rgba8(), max_size))
}

/// Threshold to two tones, then fit within `max_size` preserving aspect.
///
/// Threshold first, scale second: nearest-neighbor sampling of an already
/// two-tone mask keeps edges crisp and never invents gray.
pub(crate) fn two_tone(rgba: &RgbaImage, max_size: u32) -> MonoImage {
    let (width, height) = rgba.dimensions();
    let mut mask = GrayImage::new(width, height);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, _] = pixel.0;
        let sum = u16::from(r) + u16::from(g) + u16::from(b);
        let luma = if sum < INK_CUTOFF { 0 } else { 255 };
        mask.put_pixel(x, y, Luma([luma]));
    }

    let (target_w, target_h) = fit_within(width, height, max_size);
    let scaled = if (target_w, target_h) != (width, height) {
        imageops::resize(&mask, target_w, target_h, FilterType::Nearest)
    } else {
        mask
    };

    pack(&scaled)
}

/// Uniform scale so the longer side does not exceed `max_size`.
pub(crate) fn fit_within(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max_size {
        return (width, height);
    }
    let scale = f64::from(max_size) / f64::from(longest);
    let w = ((f64::from(width) * scale) as u32).max(1);
    let h = ((f64::from(height) * scale) as u32).max(1);
    (w, h)
}

fn pack(mask: &GrayImage) -> MonoImage {
    let (width, height) = mask.dimensions();
    let mut raster = MonoImage::new(width, height);
    for (x, y, pixel) in mask.enumerate_pixels() {
        if pixel.0[0] == 0 {
            raster.set(x, y, Tone::Foreground);
        }
    }
    raster
}
