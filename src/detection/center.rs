use image::RgbaImage;

use super::{Anomaly, AxisScan};

/// Searches column `anomaly.x` downward, starting `line_thickness` rows below the
/// anomaly, for the next pixel in the stroke color. The center lies halfway between.
pub fn scan_vertical(grid: &RgbaImage, anomaly: &Anomaly, line_thickness: u32) -> AxisScan {
    let height = grid.height();
    let start = anomaly.y.saturating_add(line_thickness);

    (start..height)
        .find(|&h| *grid.get_pixel(anomaly.x, h) == anomaly.color)
        .map_or(AxisScan::Incomplete, |h| {
            let radius = (h - anomaly.y) as f32 / 2.0;
            AxisScan::Found(anomaly.y as f32 + radius)
        })
}

/// Walks row `anomaly.y` rightward from the anomaly to the first pixel leaving the
/// stroke color. The half-span is truncated to whole pixels.
pub fn scan_horizontal(grid: &RgbaImage, anomaly: &Anomaly) -> AxisScan {
    let width = grid.width();

    (anomaly.x..width)
        .find(|&w| *grid.get_pixel(w, anomaly.y) != anomaly.color)
        .map_or(AxisScan::Incomplete, |w| {
            AxisScan::Found((anomaly.x + (w - anomaly.x) / 2) as f32)
        })
}
