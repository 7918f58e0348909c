use eframe::egui::{ColorImage, vec2};
use eframe::epaint::Color32;
use sdrdeck_messages::MagnitudeFrame;

use crate::colormap::{ColorWindow, db_to_color};

/// Scrolling waterfall image. Row 0 is the newest line.
///
/// Sized to the waterfall area in physical pixels. Any size change
/// reallocates the buffer and drops the history.
pub struct WaterfallRaster {
    width: usize,
    height: usize,
    pixels: Vec<Color32>,
}

impl WaterfallRaster {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color32::BLACK; width * height],
        }
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Reallocate for a new viewport size. Returns whether anything changed.
    pub fn resize(&mut self, width: usize, height: usize) -> bool {
        if [width, height] == self.size() {
            return false;
        }
        *self = Self::new(width, height);
        true
    }

    /// Push every row down by one and paint `frame` into row 0.
    pub fn scroll_and_paint(&mut self, frame: &MagnitudeFrame, window: ColorWindow) {
        if self.is_empty() {
            return;
        }
        let w = self.width;

        // The bottom row falls off.
        self.pixels.copy_within(0..(self.height - 1) * w, w);

        let bins = frame.bins();
        for (x, pixel) in self.pixels[..w].iter_mut().enumerate() {
            *pixel = db_to_color(bins[source_index(x, w, bins.len())], window);
        }
    }

    pub fn row(&self, y: usize) -> &[Color32] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    pub fn to_image(&self) -> ColorImage {
        ColorImage {
            size: self.size(),
            source_size: vec2(self.width as f32, self.height as f32),
            pixels: self.pixels.clone(),
        }
    }
}

/// Frame bin shown in column `x` of a `width` pixel row: `floor(x / width * bins)`.
fn source_index(x: usize, width: usize, bins: usize) -> usize {
    (x * bins / width).min(bins - 1)
}
