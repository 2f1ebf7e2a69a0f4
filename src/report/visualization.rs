use image::{Rgba, RgbaImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use log::debug;

use crate::{
    detection::CenterPoint,
    error::{LocatorError, Result},
};

pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

/// Filled square drawn with its top-left corner on the estimated center.
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    color: Rgba<u8>,
    size: u32,
}

impl Marker {
    pub fn new(color: Rgba<u8>, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(LocatorError::InvalidParameter(
                "marker size must be at least 1 pixel".into(),
            ));
        }
        Ok(Self { color, size })
    }

    pub fn color(&self) -> Rgba<u8> {
        self.color
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Pixels outside the grid are clipped.
    pub fn draw(&self, grid: &mut RgbaImage, center: CenterPoint) {
        let (x, y) = center.to_pixel();
        debug!("marking {}x{} block at ({}, {})", self.size, self.size, x, y);

        let rect = Rect::at(x, y).of_size(self.size, self.size);
        draw_filled_rect_mut(grid, rect, self.color);
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self { color: BLUE, size: 1 }
    }
}
