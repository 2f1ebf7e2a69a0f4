use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_ellipse_mut;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// A uniform canvas with a single 1-pixel circle outline.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticCircle {
    pub width: u32,
    pub height: u32,
    pub center: (i32, i32),
    pub radius: i32,
    pub background: Rgba<u8>,
    pub stroke: Rgba<u8>,
}

impl Default for SyntheticCircle {
    /// Red outline inscribed in the box [10,10]-[90,90] of a white 100x100 canvas.
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            center: (50, 50),
            radius: 40,
            background: WHITE,
            stroke: RED,
        }
    }
}

impl SyntheticCircle {
    pub fn render(&self) -> RgbaImage {
        let mut canvas = RgbaImage::from_pixel(self.width, self.height, self.background);
        if self.radius > 0 {
            draw_hollow_ellipse_mut(&mut canvas, self.center, self.radius, self.radius, self.stroke);
        }
        canvas
    }
}

pub fn generate_test_image() -> RgbaImage {
    SyntheticCircle::default().render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_outline_touches_bounding_box() {
        let image = generate_test_image();

        assert_eq!(image.dimensions(), (100, 100));
        assert_eq!(*image.get_pixel(50, 10), RED);
        assert_eq!(*image.get_pixel(50, 90), RED);
        assert_eq!(*image.get_pixel(10, 50), RED);
        assert_eq!(*image.get_pixel(90, 50), RED);
        assert_eq!(*image.get_pixel(50, 50), WHITE);
        assert_eq!(*image.get_pixel(0, 0), WHITE);
    }

    #[test]
    fn test_zero_radius_is_blank() {
        let blank = SyntheticCircle {
            width: 50,
            height: 50,
            radius: 0,
            ..Default::default()
        }
        .render();
        assert!(blank.pixels().all(|p| *p == WHITE));
    }
}
