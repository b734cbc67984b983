//! Inspect a card number against a brand image with the local Tesseract engine.
//!
//! Usage:
//!   cargo run -p cardcheck --example inspect_card --features tesseract -- [NUMBER] [IMAGE]
//!
//! Defaults to the Visa test number and `base.png` in the working directory.

use cardcheck::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let card_number = args.next().unwrap_or_else(|| "4532015112830366".to_string());
    let image_path = args.next().unwrap_or_else(|| "base.png".to_string());

    let inspector = InspectorBuilder::new()
        .engine(TesseractEngine::new())
        .build()?;

    match inspector.inspect(&card_number, &image_path) {
        Ok(result) => println!("{:?}", result),
        Err(e) => eprintln!("error: {}", e),
    }
    Ok(())
}
