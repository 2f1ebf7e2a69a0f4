use std::path::Path;

use circle_locator::{
    CircleLocator,
    detection::{AxisScan, UNRESOLVED_COORDINATE},
    error::{LocatorError, Result},
    image_utils::{ensure_input_exists, load_grid, save_grid},
    report::visualization::BLUE,
    synthetic::{SyntheticCircle, WHITE, generate_test_image},
};
use image::RgbaImage;

fn process(input: &Path, output: &Path) -> Result<()> {
    CircleLocator::new(input)?.locate_and_mark()?.save(output)
}

#[test]
fn test_bootstrapped_image_marks_center() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("image.png");
    let output = dir.path().join("out.png");

    assert!(ensure_input_exists(&input, generate_test_image).unwrap());
    process(&input, &output).unwrap();

    let source = load_grid(&input).unwrap();
    let marked = load_grid(&output).unwrap();

    let changed: Vec<_> = marked
        .enumerate_pixels()
        .filter(|(x, y, p)| source.get_pixel(*x, *y) != *p)
        .map(|(x, y, p)| (x, y, *p))
        .collect();

    assert_eq!(changed.len(), 1);
    let (x, y, color) = changed[0];
    assert_eq!(color, BLUE);
    assert!(x.abs_diff(50) <= 1, "marker x = {}", x);
    assert!(y.abs_diff(50) <= 1, "marker y = {}", y);
}

#[test]
fn test_existing_input_is_not_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("image.png");
    let blank = RgbaImage::from_pixel(50, 50, WHITE);
    save_grid(&blank, &input).unwrap();

    assert!(!ensure_input_exists(&input, generate_test_image).unwrap());
    assert_eq!(load_grid(&input).unwrap(), blank);
}

#[test]
fn test_uniform_canvas_is_saved_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("image.png");
    let output = dir.path().join("out.png");
    let blank = RgbaImage::from_pixel(50, 50, WHITE);
    save_grid(&blank, &input).unwrap();

    let result = CircleLocator::new(&input).unwrap().locate_and_mark().unwrap();
    assert!(result.detection.is_none());
    result.save(&output).unwrap();

    assert_eq!(load_grid(&output).unwrap(), blank);
}

#[test]
fn test_missing_input_reports_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("image.png");
    let output = dir.path().join("out.png");

    let err = process(&input, &output).unwrap_err();

    assert!(matches!(err, LocatorError::InputNotFound(ref p) if p == &input));
    assert!(!output.exists());
}

#[test]
fn test_circle_smaller_than_line_thickness() {
    let grid = SyntheticCircle {
        width: 60,
        height: 60,
        center: (30, 30),
        radius: 6,
        ..Default::default()
    }
    .render();

    let detection = CircleLocator::from_image(grid).locate().unwrap().unwrap();

    assert_eq!(detection.vertical, AxisScan::Incomplete);
    assert_eq!(detection.center.y, UNRESOLVED_COORDINATE);
    assert!((detection.center.x - 30.0).abs() <= 1.0);
}
