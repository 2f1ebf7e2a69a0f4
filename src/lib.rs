use std::path::Path;

use image::{DynamicImage, Rgba, RgbaImage};

use crate::{
    detection::{CircleDetection, CircleDetector, DEFAULT_LINE_THICKNESS},
    error::Result,
    image_utils::{load_grid, save_grid},
    report::visualization::{BLUE, Marker},
};

pub mod detection;
pub mod error;
pub mod image_utils;
pub mod report;
pub mod synthetic;

#[derive(Debug, Clone)]
pub struct LocatorConfig {
    pub line_thickness: u32,
    pub marker_color: Rgba<u8>,
    pub marker_size: u32,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            line_thickness: DEFAULT_LINE_THICKNESS,
            marker_color: BLUE,
            marker_size: 1,
        }
    }
}

/// Finds a single circle outline in an image and marks its estimated center.
pub struct CircleLocator {
    grid: RgbaImage,
    config: LocatorConfig,
}

impl CircleLocator {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let grid = load_grid(path)?;

        Ok(Self {
            grid,
            config: LocatorConfig::default(),
        })
    }

    pub fn from_image<I: Into<DynamicImage>>(image: I) -> Self {
        Self {
            grid: image.into().into_rgba8(),
            config: LocatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LocatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn grid(&self) -> &RgbaImage {
        &self.grid
    }

    /// Runs the scan without touching the grid.
    pub fn locate(&self) -> Result<Option<CircleDetection>> {
        let detector = CircleDetector::new(self.config.line_thickness)?;
        Ok(detector.detect(&self.grid))
    }

    /// Returns a copy of the grid with the marker drawn at the detected center.
    /// The copy is left unmodified when no anomaly is found.
    pub fn locate_and_mark(&self) -> Result<LocateResult> {
        let marker = Marker::new(self.config.marker_color, self.config.marker_size)?;
        let detection = self.locate()?;

        let mut image = self.grid.clone();
        if let Some(d) = &detection {
            marker.draw(&mut image, d.center);
        }

        Ok(LocateResult { image, detection })
    }
}

#[derive(Debug, Clone)]
pub struct LocateResult {
    pub image: RgbaImage,
    pub detection: Option<CircleDetection>,
}

impl LocateResult {
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_grid(&self.image, path)
    }
}
