use std::ops::ControlFlow;

use image::{Rgba, RgbaImage};

use super::Anomaly;

/// Row-major scan for the first pixel that differs from the background reference.
///
/// The reference starts as the corner pixel and is replaced by each visited pixel
/// that matches it, so the scan stops at the first color transition of any kind,
/// including the wrap from one row's last pixel to the next row's first.
pub fn find_first_anomaly(grid: &RgbaImage) -> Option<Anomaly> {
    let (width, height) = grid.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let background = *grid.get_pixel(0, 0);
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .try_fold(background, |reference: Rgba<u8>, (x, y)| {
            let current = *grid.get_pixel(x, y);
            if current != reference {
                ControlFlow::Break(Anomaly {
                    x,
                    y,
                    color: current,
                })
            } else {
                ControlFlow::Continue(current)
            }
        })
        .break_value()
}
