use std::process;

use circle_locator::{
    CircleLocator, error::Result, image_utils::ensure_input_exists, report::JsonReport,
    synthetic::generate_test_image,
};
use log::debug;

const INPUT_PATH: &str = "image.png";
const OUTPUT_PATH: &str = "out.png";

fn run() -> Result<()> {
    if ensure_input_exists(INPUT_PATH, generate_test_image)? {
        println!("Image not found. Creating '{}'", INPUT_PATH);
    }

    let result = CircleLocator::new(INPUT_PATH)?.locate_and_mark()?;
    match JsonReport::from(&result).to_json() {
        Ok(json) => debug!("detection report:\n{}", json),
        Err(e) => debug!("could not serialize detection report: {}", e),
    }

    result.save(OUTPUT_PATH)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    println!("Process completed.");
}
