pub mod anomaly;
pub mod center;

use image::{Rgba, RgbaImage};
use log::{debug, warn};
use serde::Serialize;

use crate::error::{LocatorError, Result};

/// Coordinate reported for an axis whose sub-scan ran off the grid.
pub const UNRESOLVED_COORDINATE: f32 = 0.0;

/// Minimum detectable diameter, and the row offset at which the bottom-edge search starts.
pub const DEFAULT_LINE_THICKNESS: u32 = 15;

/// First pixel, in row-major order, that differs from the running background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anomaly {
    pub x: u32,
    pub y: u32,
    pub color: Rgba<u8>,
}

/// Outcome of one of the two bounded center-finding scans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "coordinate", rename_all = "snake_case")]
pub enum AxisScan {
    Found(f32),
    /// The terminating pixel was never seen before the grid edge.
    Incomplete,
}

impl AxisScan {
    pub fn coordinate(self) -> f32 {
        match self {
            AxisScan::Found(value) => value,
            AxisScan::Incomplete => UNRESOLVED_COORDINATE,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, AxisScan::Found(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CenterPoint {
    pub x: f32,
    pub y: f32,
}

impl CenterPoint {
    /// Integer pixel holding this point, floored.
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleDetection {
    pub anomaly: Anomaly,
    pub vertical: AxisScan,
    pub horizontal: AxisScan,
    pub center: CenterPoint,
    pub radius: Option<f32>,
}

pub struct CircleDetector {
    line_thickness: u32,
}

impl CircleDetector {
    pub fn new(line_thickness: u32) -> Result<Self> {
        if line_thickness == 0 {
            return Err(LocatorError::InvalidParameter(
                "line thickness must be at least 1 pixel".into(),
            ));
        }
        Ok(Self { line_thickness })
    }

    pub fn line_thickness(&self) -> u32 {
        self.line_thickness
    }

    /// Locates the first outline in `grid`. Returns `None` when the grid holds a single color.
    pub fn detect(&self, grid: &RgbaImage) -> Option<CircleDetection> {
        let anomaly = anomaly::find_first_anomaly(grid)?;
        debug!(
            "anomaly at ({}, {}) with color {:?}",
            anomaly.x, anomaly.y, anomaly.color.0
        );

        Some(self.estimate_center(grid, &anomaly))
    }

    pub fn estimate_center(&self, grid: &RgbaImage, anomaly: &Anomaly) -> CircleDetection {
        let vertical = center::scan_vertical(grid, anomaly, self.line_thickness);
        let horizontal = center::scan_horizontal(grid, anomaly);

        if !vertical.is_found() {
            warn!(
                "no bottom edge below ({}, {}); center y falls back to {}",
                anomaly.x, anomaly.y, UNRESOLVED_COORDINATE
            );
        }
        if !horizontal.is_found() {
            warn!(
                "stroke at row {} runs to the image edge; center x falls back to {}",
                anomaly.y, UNRESOLVED_COORDINATE
            );
        }

        let radius = match vertical {
            AxisScan::Found(cy) => Some(cy - anomaly.y as f32),
            AxisScan::Incomplete => None,
        };

        CircleDetection {
            anomaly: *anomaly,
            vertical,
            horizontal,
            center: CenterPoint {
                x: horizontal.coordinate(),
                y: vertical.coordinate(),
            },
            radius,
        }
    }
}

impl Default for CircleDetector {
    fn default() -> Self {
        Self {
            line_thickness: DEFAULT_LINE_THICKNESS,
        }
    }
}
