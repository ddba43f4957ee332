//! Example: Print a greeting and cycle through the brightness levels.
//!
//! Run with: `cargo run --example hello_vfd -- /dev/ttyUSB0`

use std::time::Duration;

use vfd_driver::{
    Brightness, CursorMode, CustomCharacterMode, DisplayController, DisplayError, SerialConfig,
    VfdDisplay,
};

fn main() -> Result<(), DisplayError> {
    // Initialize logging (optional)
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("/dev/ttyUSB0"));

    // Open the port and bring the display to a known state
    let mut display = VfdDisplay::open(&SerialConfig::new(path))?;
    display.initialize()?;
    display.set_cursor_mode(CursorMode::Off)?;

    display.set_cursor_position(0, 0)?;
    display.write_str("Hello from Rust!")?;

    // A small box glyph on code 0x80
    display.define_custom_characters(0x80, 0x80, &[0x7F, 0x41, 0x41, 0x41, 0x7F])?;
    display.set_custom_character_mode(CustomCharacterMode::Enabled)?;
    display.set_cursor_position(0, 1)?;
    display.write(&[0x80])?;

    for level in Brightness::ALL {
        println!("Brightness: {}%", level.percent());
        display.set_brightness(level)?;
        std::thread::sleep(Duration::from_millis(300));
    }

    println!("Done: {:?}", display.state());
    display.close();
    Ok(())
}
